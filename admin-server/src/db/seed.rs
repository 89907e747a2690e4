//! Demo menu written on first start

use crate::db::models::MenuItemCreate;

fn item(code: &str, name: &str, price: i64, stock: i64, category: &str, item_type: &str) -> MenuItemCreate {
    MenuItemCreate {
        code: code.into(),
        name: name.into(),
        menu_type: Some("Khác".into()),
        price,
        stock: Some(stock),
        category: Some(category.into()),
        item_type: Some(item_type.into()),
        ..MenuItemCreate::default()
    }
}

/// Three cigarette brands and one tea, all menu type "Khác"
pub fn demo_menu() -> Vec<MenuItemCreate> {
    vec![
        item("SP000023", "Thuốc lá Vinataba", 30_000, 25_177, "Thuốc lá", "Hàng hóa thường"),
        item("SP000024", "Thuốc lá Marlboro", 30_000, 1_005, "Thuốc lá", "Hàng hóa thường"),
        item("SP000025", "Thuốc lá Kent HD", 30_000, 1_011, "Thuốc lá", "Hàng hóa thường"),
        item("SP000018", "Mint Tea", 15_000, 1_007, "Trà", "Chế biến"),
    ]
}
