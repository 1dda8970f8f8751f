//! Widget id helpers
//!
//! Plots keep per-id memory, so every chart on every slide needs its own id.

use std::fmt::Display;

/// Widget ID builder that joins components with `_`
#[derive(Debug, Clone)]
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    pub fn build(&self) -> String {
        self.components.join("_")
    }
}

/// Id of a chart placed on a slide, e.g. `slide_3_chart_class_split`
pub fn chart_id(slide: usize, name: impl Display) -> String {
    WidgetId::new("slide").with(slide).with("chart").with(name).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_builder() {
        let id = WidgetId::new("base").with("component").with(5).build();
        assert_eq!(id, "base_component_5");
    }

    #[test]
    fn test_chart_ids_differ_per_slide() {
        assert_eq!(chart_id(2, "class_split"), "slide_2_chart_class_split");
        assert_ne!(chart_id(2, "pr"), chart_id(4, "pr"));
    }
}
