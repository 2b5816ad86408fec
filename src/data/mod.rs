/// Data layer: component types, discovery, and loading.
///
/// Architecture:
/// ```text
///   working directory
///        │
///        ▼
///   ┌──────────┐
///   │ discover  │  list entries matching component_*.raw → Vec<ComponentFile>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read bytes → f32 values → ComponentGrid (28x28)
///   └──────────┘
/// ```

pub mod discover;
pub mod loader;
pub mod model;
