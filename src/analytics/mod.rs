// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

pub mod classification;
pub mod engine;
pub mod recommendations;

pub use engine::compute_analytics;
pub use recommendations::generate_recommendations;
