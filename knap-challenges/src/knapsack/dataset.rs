use super::{Challenge, Item};

pub const WAREHOUSE_CAPACITY: u64 = 15;

/// Ten grocery products from a small-business warehouse.
pub fn warehouse_items() -> Vec<Item> {
    vec![
        Item::new("K1", "Premium Rice 5 kg", 1, 7),
        Item::new("K2", "Packaged Sugar", 4, 24),
        Item::new("K3", "Cooking Oil 1 L", 2, 13),
        Item::new("K4", "High Protein Flour", 6, 36),
        Item::new("K5", "Local Ground Coffee", 5, 29),
        Item::new("K6", "Local Tea Bags", 3, 19),
        Item::new("K7", "Powdered Milk", 7, 40),
        Item::new("K8", "Table Salt", 2, 11),
        Item::new("K9", "Shelled Peanuts", 4, 27),
        Item::new("K10", "Dried Noodles", 6, 34),
    ]
}

pub fn warehouse_challenge() -> Challenge {
    Challenge {
        items: warehouse_items(),
        capacity: WAREHOUSE_CAPACITY,
    }
}
