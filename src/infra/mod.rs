// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by the application layer:
//
//   cache.rs           — Split artifacts on disk
//                        JSON blobs per strategy / level / portion,
//                        plus the config of the last run.
//
//   tokenizer_store.rs — Tokenizer loading or building, and the
//                        fixed-length PaddedTokenizer.
//
//   report.rs          — CSV summary of split sizes.
//
//   progress.rs        — Terminal progress bars.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Cached split artifacts
pub mod cache;

/// Tokenizer persistence and padding
pub mod tokenizer_store;

/// Split size CSV report
pub mod report;

/// Progress bars for long scans
pub mod progress;
