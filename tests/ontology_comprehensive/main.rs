//! Ontology Comprehensive Test Suite
//!
//! End-to-end checks of the store through the public `aurora` API.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Ledger invariants (uniqueness, scans, ancestry)
//! - **Tier 2**: Ontology projection (classification, constraints, types)
//! - **Tier 3**: Property resolution (mutability, accumulation, boxing)
//! - **Tier 4**: Persistence and configuration
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test ontology_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Ledger Invariants
mod tier1_ledger_invariants;

// Tier 2: Ontology Projection
mod tier2_ontology_projection;

// Tier 3: Property Resolution
mod tier3_property_resolution;

// Tier 4: Persistence and Configuration
mod tier4_persistence_config;
