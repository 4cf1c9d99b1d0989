//! Reusable view components shared by page templates.

pub mod product_card;

pub use product_card::{
    Activation, Badge, BadgeKind, CardActions, CardEffect, CardLayout, CardTarget, ProductCard,
};
