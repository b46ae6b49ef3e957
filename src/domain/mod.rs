// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// preprocessing pipeline works on:
//
//   row.rs        — one raw (text, label path) record
//   strategy.rs   — labeling strategies, stages and targets
//   hierarchy.rs  — the category tree lookup tables
//   error.rs      — the preprocessing error taxonomy
//   traits.rs     — seams to external collaborators
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// A raw dataset row
pub mod row;

// Flat / level / section strategies and their targets
pub mod strategy;

// Category tree lookup tables
pub mod hierarchy;

// Error taxonomy
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
