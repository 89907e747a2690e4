//! Demo catalog used to seed an empty database and by tests

use crate::models::{ProductDetails, ProductRecord};

fn row(
    id: &str,
    name: &str,
    price: &str,
    stock: &str,
    category: &str,
    item_type: &str,
) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        menu_type: "Khác".to_string(),
        price: price.to_string(),
        stock: stock.to_string(),
        details: ProductDetails {
            category: Some(category.to_string()),
            item_type: Some(item_type.to_string()),
            ..ProductDetails::default()
        },
    }
}

/// The four demo products of the products page
pub fn product_rows() -> Vec<ProductRecord> {
    vec![
        row("SP000023", "Thuốc lá Vinataba", "30,000", "25,177", "Thuốc lá", "Hàng hóa thường"),
        row("SP000024", "Thuốc lá Marlboro", "30,000", "1,005", "Thuốc lá", "Hàng hóa thường"),
        row("SP000025", "Thuốc lá Kent HD", "30,000", "1,011", "Thuốc lá", "Hàng hóa thường"),
        row("SP000018", "Mint Tea", "15,000", "1,007", "Trà", "Chế biến"),
    ]
}
