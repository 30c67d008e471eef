use crate::enums::Category;
use serde::Serialize;

/// Пункт меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Stable identifier, doubles as the checkbox DOM id
    pub id: &'static str,
    pub label: &'static str,
    pub category: Category,
}

const fn item(id: &'static str, label: &'static str, category: Category) -> MenuItem {
    MenuItem {
        id,
        label,
        category,
    }
}

/// The whole menu in declaration order. Messages list items in this order.
pub const MENU: &[MenuItem] = &[
    // Starters
    item("starter-soup", "Soup", Category::Starters),
    item("starter-salad", "Salad", Category::Starters),
    item("starter-bread", "Garlic Bread", Category::Starters),
    // Mains
    item("main-pizza", "Pizza", Category::Mains),
    item("main-burger", "Burger", Category::Mains),
    item("main-steak", "Steak", Category::Mains),
    // Desserts
    item("dessert-brownie", "Brownie", Category::Desserts),
    item("dessert-icecream", "Ice Cream", Category::Desserts),
    item("dessert-cheesecake", "Cheesecake", Category::Desserts),
];

/// Найти пункт меню по идентификатору
pub fn find(id: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.id == id)
}

/// Items of one category, in declaration order
pub fn items_in(category: Category) -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter().filter(move |item| item.category == category)
}
