// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use harvest_planner::Solution;

/// Assert a solution has no structural violations, printing them on failure.
pub fn assert_valid(solution: &Solution<'_>) {
    let violations = solution.violations();
    assert!(
        violations.is_empty(),
        "structural violations: {:#?}",
        violations
    );
}
