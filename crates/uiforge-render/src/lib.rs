//! UI Forge rendering engine.
//!
//! Rasterizes game-UI element configurations onto an RGBA surface:
//!
//! - **Geometry**: rect, rounded, chamfered and slashed outlines ([`path`])
//! - **Paint**: hex color decoding and linear/radial gradients ([`color`], [`gradient`])
//! - **Canvas**: a 2D-context style surface with clip, transform and drop
//!   shadows ([`Canvas`])
//! - **Elements**: one [`ElementRenderer`] per element kind
//! - **Post-processing**: deterministic pixel noise ([`noise`])
//! - **Export**: byte-stable PNG encoding with a BLAKE3 hash ([`png`])
//!
//! # Example
//!
//! ```
//! use uiforge_render::{render_element, RenderOptions};
//! use uiforge_spec::{ElementConfig, ElementKind};
//!
//! let config = ElementConfig::default_for(ElementKind::HealthBar);
//! let frame = render_element(&config, &RenderOptions::default()).unwrap();
//!
//! // 300x32 bar plus 10px padding on every side
//! assert_eq!((frame.width(), frame.height()), (320, 52));
//! ```

pub mod canvas;
pub mod color;
pub mod dispatch;
pub mod elements;
pub mod font;
pub mod gradient;
pub mod noise;
pub mod path;
pub mod png;
pub mod rng;
pub mod shadow;
pub mod text;

pub use canvas::{Brush, Canvas};
pub use dispatch::{
    effective_scale, render_element, surface_size, RenderDispatcher, RenderError, RenderOptions,
    RenderedElement, MAX_SURFACE_DIM,
};
pub use elements::ElementRenderer;
pub use png::{PngConfig, PngError};
pub use rng::DeterministicRng;
pub use shadow::Shadow;
pub use text::TextStyle;
