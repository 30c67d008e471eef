use contracts::domain::a001_meal_plan::{dispatch, Action, PlanMessage, PlannerState};
use contracts::enums::Category;
use leptos::prelude::*;

/// ViewModel for the meal planner form
#[derive(Clone, Copy)]
pub struct MealPlannerViewModel {
    pub state: RwSignal<PlannerState>,
}

impl MealPlannerViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PlannerState::new()),
        }
    }

    /// Run one action through `dispatch`. Rejected actions keep the old state.
    fn apply(&self, action: Action) {
        log::debug!("meal planner action: {:?}", action);
        let current = self.state.get_untracked();

        match dispatch(current, action) {
            Ok(transition) => {
                if let Some(e) = &transition.validation_error {
                    log::info!("generate rejected: {:?}", e);
                } else if let Some(message) = &transition.message {
                    log::info!("generate ok: {}", message.text);
                }
                self.state.set(transition.state);
            }
            Err(e) => log::warn!("meal planner action rejected: {}", e),
        }
    }

    pub fn switch_tab_command(&self, category: Category) {
        self.apply(Action::switch_tab(category));
        log::debug!(
            "active tab: {}",
            self.state.with_untracked(|s| s.panels.active())
        );
    }

    pub fn toggle_command(&self, item_id: &str, checked: bool) {
        self.apply(Action::Toggle {
            item_id: item_id.to_string(),
            checked,
        });
    }

    pub fn generate_command(&self) {
        self.apply(Action::Generate);
        if let Ok(json) = self.state.with_untracked(|s| serde_json::to_string(s)) {
            log::debug!("planner state: {}", json);
        }
    }

    pub fn is_active(&self, category: Category) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.panels.is_visible(category)))
    }

    pub fn is_checked(&self, item_id: &'static str) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.selection.is_selected(item_id)))
    }

    pub fn message(&self) -> Option<PlanMessage> {
        self.state.with(|s| s.message.clone())
    }
}

impl Default for MealPlannerViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// CSS class of a tab panel
pub fn panel_class(active: bool) -> &'static str {
    if active {
        "tab-panel active"
    } else {
        "tab-panel"
    }
}

/// CSS class of the message surface; empty before the first Generate
pub fn message_class(message: Option<&PlanMessage>) -> &'static str {
    message.map(|m| m.kind.css_class()).unwrap_or("message")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_meal_plan::MessageKind;

    #[test]
    fn test_panel_class() {
        assert_eq!(panel_class(true), "tab-panel active");
        assert_eq!(panel_class(false), "tab-panel");
    }

    #[test]
    fn test_message_class() {
        assert_eq!(message_class(None), "message");
        let msg = PlanMessage {
            kind: MessageKind::Success,
            text: "Your meal plan: ...".into(),
        };
        assert_eq!(message_class(Some(&msg)), "message message--success");
    }

    #[test]
    fn test_generate_lists_checked_items() {
        let vm = MealPlannerViewModel::new();
        for id in ["starter-bread", "main-pizza", "dessert-brownie"] {
            vm.toggle_command(id, true);
        }
        assert!(vm.is_checked("main-pizza").get_untracked());
        assert!(vm.message().is_none());

        vm.generate_command();

        let msg = vm.message().expect("message after generate");
        assert_eq!(msg.kind, MessageKind::Success);
        assert!(msg.text.contains("Garlic Bread"));
        assert!(msg.text.contains("Pizza"));
        assert!(msg.text.contains("Brownie"));
    }

    #[test]
    fn test_generate_with_empty_section_shows_error() {
        let vm = MealPlannerViewModel::new();
        vm.toggle_command("starter-soup", true);
        vm.generate_command();

        let msg = vm.message().expect("message after generate");
        assert_eq!(msg.kind, MessageKind::Error);
        assert!(msg.text.contains("at least one item from each section"));
    }

    #[test]
    fn test_unknown_item_keeps_state() {
        let vm = MealPlannerViewModel::new();
        vm.toggle_command("starter-soup", true);
        let before = vm.state.get_untracked();

        vm.toggle_command("main-sushi", true);

        assert_eq!(vm.state.get_untracked(), before);
    }

    #[test]
    fn test_switch_tab_moves_active_panel() {
        let vm = MealPlannerViewModel::new();
        let mains = vm.is_active(Category::Mains);
        let starters = vm.is_active(Category::Starters);
        assert!(!mains.get_untracked());
        assert!(starters.get_untracked());

        vm.switch_tab_command(Category::Mains);

        assert!(mains.get_untracked());
        assert!(!starters.get_untracked());
    }
}
