// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Static reference data: the framework catalog, the control catalog and
//! the controls-by-framework mapping. Pure lookups, no side effects.

pub mod controls;
pub mod frameworks;

pub use controls::{
    all_controls, controls_by_framework, controls_for_framework, frameworks_by_control,
};
pub use frameworks::{
    all_frameworks, control_set_name, framework_by_id, framework_id_for_control_set,
    FrameworkInfo,
};
