// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (preprocessing a dataset or inspecting its
// category tree).
//
// Rules for this layer:
//   - No tensor or text-processing code here
//   - No printing here (that's Layer 1)
//   - No direct file format handling (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The preprocessing workflow: splits, cache, data loaders
pub mod preprocess_use_case;

// Hierarchy inspection and export
pub mod hierarchy_use_case;
