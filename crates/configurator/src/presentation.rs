//! Presentation binding
//!
//! Owns the selection and turns each transition into animations on the
//! product plus a refreshed summary line. Nothing is ever applied as an
//! instantaneous jump; every visual change goes through the [`Animator`].

use crate::animation::{AnimatedProperty, Animator};
use crate::config::ConfiguratorConfig;
use crate::host::ViewerHost;
use crate::product::{Accessory, Product};
use crate::render::Color;
use crate::scene::SceneGraph;
use crate::selection::{apply_transition, SelectionAction, SelectionState};

/// Mutable view of everything a transition touches
pub struct PresentationTargets<'a, H: ViewerHost + ?Sized> {
    /// Scene graph holding the product
    pub graph: &'a mut SceneGraph,
    /// Animation scheduler
    pub animator: &'a mut Animator,
    /// Product handles
    pub product: &'a Product,
    /// Page receiving the summary
    pub host: &'a mut H,
}

/// Binds selection transitions to their visual and textual presentation
#[derive(Debug, Clone)]
pub struct PresentationBinder {
    state: SelectionState,
    color_duration: f32,
    accessory_duration: f32,
    summary_id: String,
}

impl PresentationBinder {
    /// Create a binder holding the startup selection
    pub fn new(config: &ConfiguratorConfig) -> Self {
        Self {
            state: SelectionState::new(config.scene.default_color),
            color_duration: config.animation.color_duration,
            accessory_duration: config.animation.accessory_duration,
            summary_id: config.viewer.summary_id.clone(),
        }
    }

    /// Current selection
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Apply `action`, start the matching animation, and refresh the summary
    pub fn apply<H: ViewerHost + ?Sized>(
        &mut self,
        action: SelectionAction,
        targets: PresentationTargets<'_, H>,
    ) -> SelectionState {
        self.state = apply_transition(self.state, action);
        log::debug!("Selection transition {:?} -> {:?}", action, self.state);

        let PresentationTargets { graph, animator, product, host } = targets;
        match action {
            SelectionAction::SelectColor(color) => self.animate_color(color, product, graph, animator),
            SelectionAction::ToggleLogo(visible) => self.animate_accessory(&product.logo, visible, graph, animator),
            SelectionAction::ToggleCushion(visible) => {
                self.animate_accessory(&product.cushion, visible, graph, animator);
            }
        }
        self.refresh_summary(host);
        self.state
    }

    /// Write the summary line for the current selection
    pub fn refresh_summary<H: ViewerHost + ?Sized>(&self, host: &mut H) {
        host.set_text(&self.summary_id, &self.state.summary());
    }

    fn animate_color(&self, color: Color, product: &Product, graph: &SceneGraph, animator: &mut Animator) {
        let target = color.to_vec3();
        for part in product.structural_parts() {
            animator.animate(graph, part, AnimatedProperty::MaterialColor, target, self.color_duration);
        }
    }

    fn animate_accessory(&self, accessory: &Accessory, visible: bool, graph: &SceneGraph, animator: &mut Animator) {
        animator.animate(
            graph,
            accessory.node,
            AnimatedProperty::Scale,
            Accessory::scale_for(visible),
            self.accessory_duration,
        );
        animator.animate(
            graph,
            accessory.node,
            AnimatedProperty::Position,
            accessory.position_for(visible),
            self.accessory_duration,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::host::MemoryHost;
    use crate::product::{PaletteColor, ProductAssembler};
    use approx::assert_relative_eq;

    struct Fixture {
        binder: PresentationBinder,
        graph: SceneGraph,
        animator: Animator,
        product: Product,
        host: MemoryHost,
    }

    impl Fixture {
        fn new() -> Self {
            let config = ConfiguratorConfig::default();
            let mut graph = SceneGraph::new();
            let root = graph.root();
            let product = ProductAssembler::new(config.scene.default_color).assemble(&mut graph, root);
            Self {
                binder: PresentationBinder::new(&config),
                graph,
                animator: Animator::new(),
                product,
                host: MemoryHost::new().with_text("summary-text"),
            }
        }

        fn apply(&mut self, action: SelectionAction) -> SelectionState {
            self.binder.apply(
                action,
                PresentationTargets {
                    graph: &mut self.graph,
                    animator: &mut self.animator,
                    product: &self.product,
                    host: &mut self.host,
                },
            )
        }

        fn settle(&mut self) {
            for _ in 0..120 {
                self.animator.update(1.0 / 60.0, &mut self.graph);
            }
        }
    }

    #[test]
    fn test_color_change_is_animated_not_instant() {
        let mut fixture = Fixture::new();
        fixture.apply(SelectionAction::SelectColor(PaletteColor::Red.color()));

        // Nothing moves before time advances
        let seat = fixture.product.seat;
        assert_eq!(fixture.graph.material(seat).unwrap().color, PaletteColor::DarkBlue.color());
        assert_eq!(fixture.animator.active_count(), 7);

        fixture.animator.update(0.25, &mut fixture.graph);
        let midway = fixture.graph.material(seat).unwrap().color;
        assert_ne!(midway, PaletteColor::DarkBlue.color());
        assert_ne!(midway, PaletteColor::Red.color());

        fixture.settle();
        for part in fixture.product.structural_parts() {
            assert_eq!(fixture.graph.material(part).unwrap().color.to_hex(), PaletteColor::Red.hex());
        }
    }

    #[test]
    fn test_accessory_colors_are_never_touched() {
        let mut fixture = Fixture::new();
        let logo_before = fixture.graph.material(fixture.product.logo.node).unwrap().color;
        let cushion_before = fixture.graph.material(fixture.product.cushion.node).unwrap().color;

        fixture.apply(SelectionAction::SelectColor(PaletteColor::Purple.color()));
        fixture.settle();

        assert_eq!(fixture.graph.material(fixture.product.logo.node).unwrap().color, logo_before);
        assert_eq!(fixture.graph.material(fixture.product.cushion.node).unwrap().color, cushion_before);
    }

    #[test]
    fn test_hide_collapses_and_offsets_accessory() {
        let mut fixture = Fixture::new();
        fixture.apply(SelectionAction::ToggleCushion(false));
        fixture.settle();

        let transform = fixture.graph.transform(fixture.product.cushion.node).unwrap();
        assert_eq!(transform.scale, Vec3::zeros());
        assert_relative_eq!(transform.position, fixture.product.cushion.hidden_position);
    }

    #[test]
    fn test_hide_then_show_returns_to_rest() {
        let mut fixture = Fixture::new();
        fixture.apply(SelectionAction::ToggleLogo(false));
        fixture.settle();
        fixture.apply(SelectionAction::ToggleLogo(true));
        fixture.settle();

        let transform = fixture.graph.transform(fixture.product.logo.node).unwrap();
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(transform.position, fixture.product.logo.resting_position);
    }

    #[test]
    fn test_rapid_toggle_converges_to_last_request() {
        let mut fixture = Fixture::new();
        fixture.apply(SelectionAction::ToggleLogo(false));
        fixture.animator.update(0.1, &mut fixture.graph);
        fixture.apply(SelectionAction::ToggleLogo(true));
        fixture.settle();

        let transform = fixture.graph.transform(fixture.product.logo.node).unwrap();
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(transform.position, fixture.product.logo.resting_position);
        assert_eq!(fixture.animator.active_count(), 0);
    }

    #[test]
    fn test_summary_is_written_after_each_transition() {
        let mut fixture = Fixture::new();
        fixture.apply(SelectionAction::SelectColor(PaletteColor::Green.color()));
        assert_eq!(fixture.host.text("summary-text"), Some("Color: Green | Logo: On | Cushion: On"));
        fixture.apply(SelectionAction::ToggleLogo(false));
        assert_eq!(fixture.host.text("summary-text"), Some("Color: Green | Logo: Off | Cushion: On"));
    }
}
