//! Demo catalog seeding.
//!
//! The catalog is loaded only into an empty `restaurants` table, so running
//! the seed against a live database never duplicates or overwrites data.

use rust_decimal::Decimal;
use sqlx::{PgPool, query, query_scalar};
use tracing::info;

struct SeedRestaurant {
    id: &'static str,
    name: &'static str,
    cuisine: &'static str,
    /// Tenths of a star.
    rating: i64,
    delivery_time: &'static str,
    image: &'static str,
}

struct SeedMenuItem {
    id: &'static str,
    restaurant_id: &'static str,
    name: &'static str,
    description: &'static str,
    /// Minor currency units.
    price: i64,
    image: &'static str,
}

const PIZZA_IMAGE: &str = "https://images.unsplash.com/photo-1560750133-aafd1707f646?w=400";
const BURGER_IMAGE: &str = "https://images.unsplash.com/photo-1607013401178-f9c15ab575bb?w=400";
const CHINESE_IMAGE: &str = "https://images.unsplash.com/photo-1625937751876-4515cd8e78bd?w=400";
const ABACHA_IMAGE: &str = "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9?w=400";
const SHARATON_IMAGE: &str = "https://images.unsplash.com/photo-1623428187969-5da2dcea5ebf?w=400";
const SUYA_IMAGE: &str = "https://images.unsplash.com/photo-1600891964599-f61ba0e24092?w=400";

const RESTAURANTS: &[SeedRestaurant] = &[
    SeedRestaurant {
        id: "1",
        name: "Pizza Palace",
        cuisine: "Italian, Pizza",
        rating: 45,
        delivery_time: "25-35 min",
        image: PIZZA_IMAGE,
    },
    SeedRestaurant {
        id: "2",
        name: "Burger Hut",
        cuisine: "Mixed Burger, Salads",
        rating: 47,
        delivery_time: "20-30 min",
        image: BURGER_IMAGE,
    },
    SeedRestaurant {
        id: "3",
        name: "Chinese Food",
        cuisine: "China",
        rating: 48,
        delivery_time: "30-40 min",
        image: CHINESE_IMAGE,
    },
    SeedRestaurant {
        id: "4",
        name: "Abacha Joint",
        cuisine: "Local Igbo Food",
        rating: 46,
        delivery_time: "25-35 min",
        image: ABACHA_IMAGE,
    },
    SeedRestaurant {
        id: "5",
        name: "Open sharaton",
        cuisine: "Local Nigerian Food",
        rating: 44,
        delivery_time: "15-25 min",
        image: SHARATON_IMAGE,
    },
    SeedRestaurant {
        id: "6",
        name: "Suya World",
        cuisine: "International, Mixed",
        rating: 43,
        delivery_time: "30-45 min",
        image: SUYA_IMAGE,
    },
];

const MENU_ITEMS: &[SeedMenuItem] = &[
    SeedMenuItem {
        id: "m1",
        restaurant_id: "1",
        name: "Margherita Pizza",
        description: "Classic tomato sauce, mozzarella, and basil",
        price: 1299,
        image: PIZZA_IMAGE,
    },
    SeedMenuItem {
        id: "m2",
        restaurant_id: "1",
        name: "Pepperoni Deluxe",
        description: "Double pepperoni, extra cheese, and oregano",
        price: 1599,
        image: PIZZA_IMAGE,
    },
    SeedMenuItem {
        id: "m3",
        restaurant_id: "1",
        name: "Veggie Supreme",
        description: "Bell peppers, mushrooms, olives, and onions",
        price: 1399,
        image: PIZZA_IMAGE,
    },
    SeedMenuItem {
        id: "m4",
        restaurant_id: "2",
        name: "Classic Burger",
        description: "Beef patty, lettuce, tomato, onion, and special sauce",
        price: 999,
        image: BURGER_IMAGE,
    },
    SeedMenuItem {
        id: "m5",
        restaurant_id: "2",
        name: "Bacon Cheeseburger",
        description: "Double beef, crispy bacon, and cheddar cheese",
        price: 1299,
        image: BURGER_IMAGE,
    },
    SeedMenuItem {
        id: "m6",
        restaurant_id: "3",
        name: "California Roll",
        description: "Crab, avocado, and cucumber",
        price: 899,
        image: CHINESE_IMAGE,
    },
    SeedMenuItem {
        id: "m7",
        restaurant_id: "3",
        name: "Salmon Nigiri Set",
        description: "8 pieces of fresh salmon nigiri",
        price: 1699,
        image: CHINESE_IMAGE,
    },
    SeedMenuItem {
        id: "m8",
        restaurant_id: "4",
        name: "Carbonara",
        description: "Creamy sauce with pancetta and parmesan",
        price: 1499,
        image: ABACHA_IMAGE,
    },
    SeedMenuItem {
        id: "m9",
        restaurant_id: "4",
        name: "Spaghetti Bolognese",
        description: "Rich meat sauce with Italian herbs",
        price: 1399,
        image: ABACHA_IMAGE,
    },
    SeedMenuItem {
        id: "m10",
        restaurant_id: "5",
        name: "Caesar Salad",
        description: "Romaine lettuce, croutons, and parmesan",
        price: 1099,
        image: SHARATON_IMAGE,
    },
    SeedMenuItem {
        id: "m11",
        restaurant_id: "5",
        name: "Greek Salad",
        description: "Tomatoes, cucumbers, feta, and olives",
        price: 1199,
        image: SHARATON_IMAGE,
    },
    SeedMenuItem {
        id: "m12",
        restaurant_id: "6",
        name: "Mixed Grill Platter",
        description: "Chicken, beef, and lamb with sides",
        price: 1899,
        image: SUYA_IMAGE,
    },
];

const INSERT_RESTAURANTS_SQL: &str = r"
INSERT INTO restaurants (id, name, cuisine, rating, delivery_time, image)
SELECT * FROM UNNEST($1::text[], $2::text[], $3::text[], $4::numeric[], $5::text[], $6::text[])
";

const INSERT_MENU_ITEMS_SQL: &str = r"
INSERT INTO menu_items (id, restaurant_id, name, description, price, image)
SELECT * FROM UNNEST($1::text[], $2::text[], $3::text[], $4::text[], $5::numeric[], $6::text[])
";

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog was empty and has been loaded.
    Seeded { restaurants: usize, menu_items: usize },

    /// Restaurants already existed; nothing was written.
    Skipped,
}

/// Load the demo restaurants and menu items when the catalog is empty.
///
/// Runs in a single transaction holding an exclusive lock on `restaurants`,
/// so concurrent callers cannot both seed.
///
/// # Errors
///
/// Returns an error if any statement fails. Nothing is written in that case.
pub async fn seed_catalog(pool: &PgPool) -> Result<SeedOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    query("LOCK TABLE restaurants IN EXCLUSIVE MODE")
        .execute(&mut *tx)
        .await?;

    let existing: i64 = query_scalar("SELECT COUNT(*) FROM restaurants")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        info!(existing, "catalog already populated, skipping seed");

        return Ok(SeedOutcome::Skipped);
    }

    query(INSERT_RESTAURANTS_SQL)
        .bind(RESTAURANTS.iter().map(|r| r.id).collect::<Vec<_>>())
        .bind(RESTAURANTS.iter().map(|r| r.name).collect::<Vec<_>>())
        .bind(RESTAURANTS.iter().map(|r| r.cuisine).collect::<Vec<_>>())
        .bind(
            RESTAURANTS
                .iter()
                .map(|r| Decimal::new(r.rating, 1))
                .collect::<Vec<_>>(),
        )
        .bind(RESTAURANTS.iter().map(|r| r.delivery_time).collect::<Vec<_>>())
        .bind(RESTAURANTS.iter().map(|r| r.image).collect::<Vec<_>>())
        .execute(&mut *tx)
        .await?;

    query(INSERT_MENU_ITEMS_SQL)
        .bind(MENU_ITEMS.iter().map(|m| m.id).collect::<Vec<_>>())
        .bind(MENU_ITEMS.iter().map(|m| m.restaurant_id).collect::<Vec<_>>())
        .bind(MENU_ITEMS.iter().map(|m| m.name).collect::<Vec<_>>())
        .bind(MENU_ITEMS.iter().map(|m| m.description).collect::<Vec<_>>())
        .bind(
            MENU_ITEMS
                .iter()
                .map(|m| Decimal::new(m.price, 2))
                .collect::<Vec<_>>(),
        )
        .bind(MENU_ITEMS.iter().map(|m| m.image).collect::<Vec<_>>())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!(
        restaurants = RESTAURANTS.len(),
        menu_items = MENU_ITEMS.len(),
        "seeded demo catalog"
    );

    Ok(SeedOutcome::Seeded {
        restaurants: RESTAURANTS.len(),
        menu_items: MENU_ITEMS.len(),
    })
}
