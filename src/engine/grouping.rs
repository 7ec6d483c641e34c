//! Punch stream grouping.
//!
//! Partitions a flat, time-ordered punch list into per-employee sequences.
//! Pure partition: no filtering, validation, or correction happens here.
//! Per-employee punch order is preserved from the input, and employees
//! appear in first-appearance order.

use std::collections::HashMap;

use crate::models::{EmployeeRef, PunchRecord};

/// One employee's slice of the punch stream.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeePunches {
    /// The employee, taken from their first punch in the stream.
    pub employee: EmployeeRef,
    /// The employee's punches in original stream order.
    pub punches: Vec<PunchRecord>,
}

/// Partitions a punch stream into per-employee groups.
///
/// Grouping is keyed by employee id. The relative order of punches within
/// one employee is exactly their order in the input, and groups are ordered
/// by each employee's first appearance, so an interleaved stream and a
/// pre-partitioned stream of the same punches produce identical groups.
///
/// # Example
///
/// ```
/// use timeclock_engine::engine::group_by_employee;
///
/// let groups = group_by_employee(Vec::new());
/// assert!(groups.is_empty());
/// ```
pub fn group_by_employee(punches: Vec<PunchRecord>) -> Vec<EmployeePunches> {
    let mut groups: Vec<EmployeePunches> = Vec::new();
    let mut index_by_employee: HashMap<String, usize> = HashMap::new();

    for punch in punches {
        match index_by_employee.get(&punch.employee.id) {
            Some(&index) => groups[index].punches.push(punch),
            None => {
                index_by_employee.insert(punch.employee.id.clone(), groups.len());
                groups.push(EmployeePunches {
                    employee: punch.employee.clone(),
                    punches: vec![punch],
                });
            }
        }
    }

    groups
}
