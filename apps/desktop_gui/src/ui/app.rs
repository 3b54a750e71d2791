use chrono::{DateTime, Local};
use eframe::egui;
use roster_core::{
    CommandOutcome, EditContext, RecordStore, RosterController, RosterView, RowAction, Settings,
};
use shared::{
    domain::{EmployeeDraft, PerformanceTier, RoleFilter},
    protocol::RosterCommand,
};

use crate::controller::events::{err_label, UiError, UiErrorCategory, UiErrorContext};
use crate::controller::orchestration::dispatch_roster_command;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub window_title: String,
    pub confirm_delete: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for StartupConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            window_title: settings.window_title.clone(),
            confirm_delete: settings.confirm_delete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
    Info,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

impl StatusBanner {
    fn from_error(err: &UiError) -> Self {
        let severity = match err.category() {
            UiErrorCategory::NotFound => StatusBannerSeverity::Info,
            UiErrorCategory::Validation | UiErrorCategory::Unknown => StatusBannerSeverity::Error,
        };
        Self {
            severity,
            message: format!("{}: {}", err_label(err.category()), err.message()),
        }
    }
}

/// Text buffers owned by the form dialog while it is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EmployeeForm {
    name: String,
    role: String,
    score: String,
}

impl EmployeeForm {
    fn from_draft(draft: &EmployeeDraft) -> Self {
        Self {
            name: draft.name.clone(),
            role: draft.role.clone(),
            score: draft.score.clone(),
        }
    }

    fn submit_command(&self) -> RosterCommand {
        RosterCommand::SubmitEditor {
            name: self.name.clone(),
            role: self.role.clone(),
            score: self.score.clone(),
        }
    }
}

pub struct DashboardApp {
    controller: RosterController,
    view: RosterView,
    window_title: String,

    search_input: String,
    form: EmployeeForm,

    status: String,
    status_updated_at: Option<DateTime<Local>>,
    status_banner: Option<StatusBanner>,
    blocking_error: Option<UiError>,
}

impl DashboardApp {
    pub fn bootstrap(
        store: RecordStore,
        startup: StartupConfig,
        startup_error: Option<String>,
    ) -> Self {
        let controller =
            RosterController::new(store).with_delete_confirmation(startup.confirm_delete);
        let view = controller.view();
        let status_banner = startup_error.map(|message| {
            StatusBanner::from_error(&UiError::from_message(
                UiErrorContext::Startup,
                format!("{message}; showing the built-in roster"),
            ))
        });

        Self {
            status: format!("{} employees loaded", view.summary.count),
            controller,
            view,
            window_title: startup.window_title,
            search_input: String::new(),
            form: EmployeeForm::default(),
            status_updated_at: None,
            status_banner,
            blocking_error: None,
        }
    }

    fn apply_actions(&mut self, actions: Vec<RosterCommand>) {
        if actions.is_empty() {
            return;
        }

        for cmd in actions {
            let previous_status = self.status.clone();
            match dispatch_roster_command(&mut self.controller, cmd, &mut self.status) {
                Ok(CommandOutcome::EditorOpened(_)) => {
                    if let EditContext::Editing { draft, .. } = self.controller.edit_context() {
                        self.form = EmployeeForm::from_draft(draft);
                    }
                }
                Ok(CommandOutcome::Committed(_)) | Ok(CommandOutcome::EditorClosed) => {
                    self.form = EmployeeForm::default();
                }
                Ok(_) => {}
                Err(err) if err.is_blocking() => {
                    tracing::debug!(context = ?err.context(), "blocking ui error");
                    self.blocking_error = Some(err);
                }
                Err(err) => {
                    tracing::debug!(context = ?err.context(), "non-blocking ui error");
                    self.status_banner = Some(StatusBanner::from_error(&err));
                }
            }
            if self.status != previous_status {
                self.status_updated_at = Some(Local::now());
            }
        }

        self.view = self.controller.view();
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui, actions: &mut Vec<RosterCommand>) {
        ui.horizontal(|ui| {
            ui.heading(self.window_title.as_str());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Add Employee").clicked() {
                    actions.push(RosterCommand::OpenEditor { employee_id: None });
                }
            });
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let search = egui::TextEdit::singleline(&mut self.search_input)
                .id_salt("search_input")
                .hint_text("Search by name...")
                .desired_width(260.0);
            if ui.add(search).changed() {
                actions.push(RosterCommand::SetSearch {
                    text: self.search_input.clone(),
                });
            }

            let mut selected = self.view.role_filter.clone();
            egui::ComboBox::from_id_salt("role_filter")
                .selected_text(selected.label().to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selected, RoleFilter::All, RoleFilter::ALL_LABEL);
                    for role in &self.view.roles {
                        ui.selectable_value(
                            &mut selected,
                            RoleFilter::Only(role.clone()),
                            role.as_str(),
                        );
                    }
                });
            if selected != self.view.role_filter {
                actions.push(RosterCommand::SetRoleFilter { filter: selected });
            }
        });
    }

    fn show_summary(&self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Dashboard Summary").strong().size(15.0));
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            for stat in self.view.summary.stats() {
                egui::Frame::new()
                    .fill(ui.visuals().faint_bg_color)
                    .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::symmetric(14, 8))
                    .show(ui, |ui| {
                        ui.set_min_width(150.0);
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&stat.value).strong().size(20.0));
                            ui.small(stat.label);
                        });
                    });
            }
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
                StatusBannerSeverity::Info => (
                    egui::Color32::from_rgb(48, 72, 104),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 132, 175)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }

    fn show_table(&self, ui: &mut egui::Ui, actions: &mut Vec<RosterCommand>) {
        let table = &self.view.table;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("roster_table")
                    .striped(true)
                    .num_columns(table.headers.len())
                    .min_col_width(90.0)
                    .spacing(egui::vec2(18.0, 8.0))
                    .show(ui, |ui| {
                        for header in &table.headers {
                            let text = egui::RichText::new(header.text()).strong();
                            match header.activate() {
                                Some(cmd) => {
                                    let response = ui
                                        .add(egui::Button::new(text).frame(false))
                                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                                    if response.clicked() {
                                        actions.push(cmd);
                                    }
                                }
                                None => {
                                    ui.label(text);
                                }
                            }
                        }
                        ui.end_row();

                        for row in &table.rows {
                            let color = tier_color(row.tier);
                            ui.label(egui::RichText::new(&row.name).color(color));
                            ui.label(row.role.as_str());
                            ui.label(
                                egui::RichText::new(row.score.to_string())
                                    .color(color)
                                    .strong(),
                            )
                            .on_hover_text(row.class_name());
                            ui.horizontal(|ui| {
                                for action in RowAction::ALL {
                                    if ui.small_button(action.label()).clicked() {
                                        actions.push(row.command_for(action));
                                    }
                                }
                            });
                            ui.end_row();
                        }
                    });

                if table.is_empty() {
                    ui.add_space(12.0);
                    ui.weak("No employees match the current filters.");
                }
            });
    }

    fn show_editor_window(&mut self, ctx: &egui::Context, actions: &mut Vec<RosterCommand>) {
        let Some(target) = self.view.edit.target() else {
            return;
        };

        let mut open = true;
        let enabled = self.blocking_error.is_none();
        egui::Window::new(target.title())
            .id(egui::Id::new("employee_editor"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    egui::Grid::new("employee_form")
                        .num_columns(2)
                        .spacing(egui::vec2(10.0, 8.0))
                        .show(ui, |ui| {
                            ui.label("Name");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form.name)
                                    .id_salt("form_name")
                                    .desired_width(220.0),
                            );
                            ui.end_row();

                            ui.label("Role");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.form.role)
                                    .id_salt("form_role")
                                    .desired_width(220.0),
                            );
                            ui.end_row();

                            ui.label("Score");
                            let score = ui.add(
                                egui::TextEdit::singleline(&mut self.form.score)
                                    .id_salt("form_score")
                                    .hint_text("0-100")
                                    .desired_width(80.0),
                            );
                            if score.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                                actions.push(self.form.submit_command());
                            }
                            ui.end_row();
                        });

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() {
                            actions.push(self.form.submit_command());
                        }
                        if ui.button("Cancel").clicked() {
                            actions.push(RosterCommand::CancelEditor);
                        }
                    });
                });
            });

        if !open {
            actions.push(RosterCommand::CancelEditor);
        }
    }

    fn show_delete_confirmation(&self, ctx: &egui::Context, actions: &mut Vec<RosterCommand>) {
        let Some(pending) = &self.view.pending_delete else {
            return;
        };

        egui::Window::new("Confirm delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(pending.prompt());
                ui.label(egui::RichText::new(&pending.name).strong());
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let delete = egui::Button::new(
                        egui::RichText::new("Delete").color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(170, 60, 60));
                    if ui.add(delete).clicked() {
                        actions.push(RosterCommand::ConfirmDelete);
                    }
                    if ui.button("Cancel").clicked() {
                        actions.push(RosterCommand::DismissDelete);
                    }
                });
            });
    }

    fn show_blocking_error(&mut self, ctx: &egui::Context) {
        let Some(err) = &self.blocking_error else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new(err_label(err.category()))
            .id(egui::Id::new("blocking_error"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 80.0])
            .show(ctx, |ui| {
                ui.label(err.message());
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });

        if acknowledged {
            self.blocking_error = None;
        }
    }

    fn status_line(&self) -> String {
        match self.status_updated_at {
            Some(at) => format!("[{}] {}", at.format("%H:%M:%S"), self.status),
            None => self.status.clone(),
        }
    }
}

fn tier_color(tier: PerformanceTier) -> egui::Color32 {
    match tier {
        PerformanceTier::High => egui::Color32::from_rgb(76, 175, 80),
        PerformanceTier::Medium => egui::Color32::from_rgb(230, 162, 60),
        PerformanceTier::Low => egui::Color32::from_rgb(229, 83, 75),
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(6.0);
            self.show_toolbar(ui, &mut actions);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(self.status_line());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            self.show_summary(ui);
            ui.add_space(10.0);
            ui.separator();
            self.show_table(ui, &mut actions);
        });

        self.show_editor_window(ctx, &mut actions);
        self.show_delete_confirmation(ctx, &mut actions);
        self.show_blocking_error(ctx);

        self.apply_actions(actions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::EmployeeId;

    fn app() -> DashboardApp {
        DashboardApp::bootstrap(RecordStore::default(), StartupConfig::default(), None)
    }

    #[test]
    fn opening_editor_prefills_form() {
        let mut app = app();
        app.apply_actions(vec![RosterCommand::OpenEditor {
            employee_id: Some(EmployeeId(1)),
        }]);
        assert_eq!(
            app.form,
            EmployeeForm {
                name: "Alice Johnson".to_string(),
                role: "Developer".to_string(),
                score: "88".to_string(),
            }
        );
        assert!(app.view.edit.is_editing());
    }

    #[test]
    fn invalid_submit_raises_blocking_error_and_keeps_form() {
        let mut app = app();
        app.apply_actions(vec![RosterCommand::OpenEditor { employee_id: None }]);
        app.form.name = "Zed".to_string();
        app.form.role = "Tester".to_string();
        app.form.score = "101".to_string();
        let submit = app.form.submit_command();
        app.apply_actions(vec![submit]);

        let err = app.blocking_error.as_ref().expect("blocking error");
        assert_eq!(err.message(), "Score must be between 0 and 100");
        assert!(app.view.edit.is_editing());
        assert_eq!(app.form.score, "101");
        assert_eq!(app.view.summary.count, 4);
    }

    #[test]
    fn stale_delete_shows_banner() {
        let mut app = app();
        app.apply_actions(vec![RosterCommand::RequestDelete {
            employee_id: EmployeeId(99),
        }]);
        let banner = app.status_banner.as_ref().expect("banner");
        assert_eq!(banner.severity, StatusBannerSeverity::Info);
        assert!(app.blocking_error.is_none());
    }

    #[test]
    fn confirmed_delete_refreshes_view() {
        let mut app = app();
        app.apply_actions(vec![
            RosterCommand::RequestDelete {
                employee_id: EmployeeId(4),
            },
            RosterCommand::ConfirmDelete,
        ]);
        assert_eq!(app.view.table.rows.len(), 3);
        assert_eq!(app.status, "Deleted David Mwangi");
        assert!(app.status_line().ends_with("Deleted David Mwangi"));
    }

    #[test]
    fn startup_error_is_reported() {
        let app = DashboardApp::bootstrap(
            RecordStore::default(),
            StartupConfig::default(),
            Some("failed to read seed file 'x.json'".to_string()),
        );
        let banner = app.status_banner.as_ref().expect("banner");
        assert!(banner.message.contains("built-in roster"));
    }
}
