//! Infrastructure — a named configuration snapshot assembled step by step.
//!
//! [`SmartCityBuilder`] accumulates parts into an in-progress
//! [`Infrastructure`]; [`InfrastructureDirector`] knows the recipes.
//! [`InfrastructureBuilder::get_result`] hands the product over and starts a
//! fresh one, so a returned product is never touched by later build steps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::InfrastructureId;

pub const TRANSPORT_NETWORK: &str = "Transport Network";
pub const SMART_GRID: &str = "Smart Grid";
pub const SECURITY_PERIMETER: &str = "Security Perimeter";

/// One named component of an infrastructure project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    pub specification: String,
}

/// The product being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    pub id: InfrastructureId,
    parts: Vec<Part>,
}

impl Default for Infrastructure {
    fn default() -> Self {
        Self {
            id: InfrastructureId::new(),
            parts: Vec::new(),
        }
    }
}

impl Infrastructure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a part, replacing the specification if `name` is already present.
    pub fn add_part(&mut self, name: impl Into<String>, specification: impl Into<String>) {
        let name = name.into();
        let specification = specification.into();
        match self.parts.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.specification = specification,
            None => self.parts.push(Part {
                name,
                specification,
            }),
        }
    }

    /// Parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[must_use]
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn has_part(&self, name: &str) -> bool {
        self.part(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for Infrastructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- City Infrastructure Configuration ---")?;
        for part in &self.parts {
            writeln!(f, "- {}: {}", part.name, part.specification)?;
        }
        write!(f, "---------------------------------------")
    }
}

/// Step-by-step construction of an [`Infrastructure`].
pub trait InfrastructureBuilder {
    /// Discard the in-progress product and start an empty one.
    fn reset(&mut self);

    fn build_transport_network(&mut self);

    fn build_smart_grid(&mut self);

    fn build_security_perimeter(&mut self);

    /// Hand over the in-progress product and start an empty one.
    fn get_result(&mut self) -> Infrastructure;
}

/// Builder producing the standard smart-city parts.
#[derive(Debug, Default)]
pub struct SmartCityBuilder {
    infrastructure: Infrastructure,
}

impl SmartCityBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the in-progress product.
    #[must_use]
    pub fn in_progress(&self) -> &Infrastructure {
        &self.infrastructure
    }
}

impl InfrastructureBuilder for SmartCityBuilder {
    fn reset(&mut self) {
        self.infrastructure = Infrastructure::new();
    }

    fn build_transport_network(&mut self) {
        self.infrastructure.add_part(
            TRANSPORT_NETWORK,
            "Integrated traffic light system and tram lines.",
        );
    }

    fn build_smart_grid(&mut self) {
        self.infrastructure.add_part(
            SMART_GRID,
            "Decentralized energy management with solar integration.",
        );
    }

    fn build_security_perimeter(&mut self) {
        self.infrastructure.add_part(
            SECURITY_PERIMETER,
            "AI-powered surveillance and rapid response units.",
        );
    }

    fn get_result(&mut self) -> Infrastructure {
        std::mem::take(&mut self.infrastructure)
    }
}

/// Named construction recipe understood by [`InfrastructureDirector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    Minimal,
    Full,
}

/// Knows which builder steps make up each [`Recipe`].
#[derive(Debug, Default)]
pub struct InfrastructureDirector<B> {
    builder: B,
}

impl<B: InfrastructureBuilder> InfrastructureDirector<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn builder_mut(&mut self) -> &mut B {
        &mut self.builder
    }

    pub fn build_minimal_infrastructure(&mut self) {
        self.builder.build_transport_network();
    }

    pub fn build_full_infrastructure(&mut self) {
        self.builder.build_transport_network();
        self.builder.build_smart_grid();
        self.builder.build_security_perimeter();
    }

    /// Run `recipe` on the builder and return the finished product.
    pub fn construct(&mut self, recipe: Recipe) -> Infrastructure {
        match recipe {
            Recipe::Minimal => self.build_minimal_infrastructure(),
            Recipe::Full => self.build_full_infrastructure(),
        }
        self.builder.get_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(infrastructure: &Infrastructure) -> Vec<&str> {
        infrastructure
            .parts()
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    #[test]
    fn should_contain_three_parts_in_order_after_full_build() {
        let mut director = InfrastructureDirector::new(SmartCityBuilder::new());
        director.build_full_infrastructure();
        let full = director.builder_mut().get_result();
        assert_eq!(
            names(&full),
            [TRANSPORT_NETWORK, SMART_GRID, SECURITY_PERIMETER]
        );
    }

    #[test]
    fn should_contain_only_transport_network_after_minimal_build() {
        let mut director = InfrastructureDirector::new(SmartCityBuilder::new());
        director.build_minimal_infrastructure();
        let minimal = director.builder_mut().get_result();
        assert_eq!(names(&minimal), [TRANSPORT_NETWORK]);
        assert!(!minimal.has_part(SMART_GRID));
    }

    #[test]
    fn should_return_distinct_products_when_building_twice() {
        let mut director = InfrastructureDirector::new(SmartCityBuilder::new());
        let full = director.construct(Recipe::Full);
        let minimal = director.construct(Recipe::Minimal);
        assert_ne!(full.id, minimal.id);
        assert_eq!(full.len(), 3);
        assert_eq!(minimal.len(), 1);
    }

    #[test]
    fn should_reset_builder_when_result_taken() {
        let mut builder = SmartCityBuilder::new();
        builder.build_smart_grid();
        let taken = builder.get_result();
        assert!(builder.in_progress().is_empty());
        assert_ne!(builder.in_progress().id, taken.id);
    }

    #[test]
    fn should_not_mutate_returned_product_on_later_steps() {
        let mut builder = SmartCityBuilder::new();
        builder.build_transport_network();
        let first = builder.get_result();
        builder.build_security_perimeter();
        assert_eq!(names(&first), [TRANSPORT_NETWORK]);
    }

    #[test]
    fn should_overwrite_description_when_part_added_twice() {
        let mut infrastructure = Infrastructure::new();
        infrastructure.add_part("Smart Grid", "v1");
        infrastructure.add_part("Smart Grid", "v2");
        assert_eq!(infrastructure.len(), 1);
        assert_eq!(
            infrastructure.part("Smart Grid").unwrap().specification,
            "v2"
        );
    }

    #[test]
    fn should_not_duplicate_parts_when_recipe_repeated_before_result() {
        let mut director = InfrastructureDirector::new(SmartCityBuilder::new());
        director.build_full_infrastructure();
        director.build_full_infrastructure();
        assert_eq!(director.builder_mut().get_result().len(), 3);
    }

    #[test]
    fn should_discard_parts_when_reset() {
        let mut builder = SmartCityBuilder::new();
        builder.build_transport_network();
        builder.reset();
        assert!(builder.get_result().is_empty());
    }

    #[test]
    fn should_render_configuration_block() {
        let mut director = InfrastructureDirector::new(SmartCityBuilder::new());
        let minimal = director.construct(Recipe::Minimal);
        assert_eq!(
            minimal.to_string(),
            "--- City Infrastructure Configuration ---\n\
             - Transport Network: Integrated traffic light system and tram lines.\n\
             ---------------------------------------"
        );
    }
}
