// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Compliance Assessment Library
 * Exposes assessment modules for the aphelion binary and for testing
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod catalog;
pub mod str_utils;
pub mod types;

// Analytics engine: scoring, risk classification, recommendations
pub mod analytics;

// Assessment report generation
pub mod reporting;

// Stateless HTTP assessment API
pub mod api;

// Production error handling
pub mod errors;
