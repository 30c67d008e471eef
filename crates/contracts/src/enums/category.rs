use serde::{Deserialize, Serialize};

/// Разделы меню (вкладки формы)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Starters,
    Mains,
    Desserts,
}

impl Category {
    /// Fixed display and validation order
    pub const ALL: [Category; 3] = [Category::Starters, Category::Mains, Category::Desserts];

    /// Получить код раздела
    pub fn code(&self) -> &'static str {
        match self {
            Category::Starters => "starters",
            Category::Mains => "mains",
            Category::Desserts => "desserts",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Starters => "Starters",
            Category::Mains => "Mains",
            Category::Desserts => "Desserts",
        }
    }

    /// DOM id of the tab button, e.g. `tab-mains`
    pub fn tab_id(&self) -> String {
        format!("tab-{}", self.code())
    }

    /// DOM id of the panel, e.g. `panel-mains`
    pub fn panel_id(&self) -> String {
        format!("panel-{}", self.code())
    }

    /// Получить все разделы
    pub fn all() -> Vec<Category> {
        Self::ALL.to_vec()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
