//! Employee / department / project bookkeeping with domain-typed indices.
//!
//! Every container is addressed by its own index type; an employee index
//! cannot reach into the department list and raw integers are refused.

use std::collections::BTreeMap;

use dense_index::prelude::*;

define_index!(Employee, Department, Project, TeamPosition);

// =============================================================================
// Domain Records
// =============================================================================

struct Staff {
    name: &'static str,
    department: DepartmentIndex,
    salary: u32,
}

struct Unit {
    name: &'static str,
    manager: EmployeeIndex,
}

struct Initiative {
    name: &'static str,
    // Ordered by position in the team, not by employee index.
    team: DenseVec<EmployeeIndex, TeamPositionIndex>,
}

fn main() {
    println!("=== Employee Management ===");

    let mut employees: DenseVec<Staff, EmployeeIndex> = DenseVec::new();
    let mut departments: DenseVec<Unit, DepartmentIndex> = DenseVec::new();
    let mut projects: DenseVec<Initiative, ProjectIndex> = DenseVec::new();

    let engineering = departments.push(Unit { name: "Engineering", manager: EmployeeIndex::default() });
    let sales = departments.push(Unit { name: "Sales", manager: EmployeeIndex::default() });

    let alice = employees.push(Staff { name: "Alice Smith", department: engineering, salary: 95_000 });
    let bob = employees.push(Staff { name: "Bob Jones", department: engineering, salary: 85_000 });
    let charlie = employees.push(Staff { name: "Charlie Brown", department: sales, salary: 75_000 });
    let diana = employees.push(Staff { name: "Diana Prince", department: sales, salary: 90_000 });

    departments[engineering].manager = alice;
    departments[sales].manager = diana;

    projects.push(Initiative { name: "Website Redesign", team: dense![alice, bob] });
    projects.push(Initiative { name: "Sales Campaign", team: dense![charlie, diana] });

    // employees[engineering] or projects[0] would not compile.

    println!("\nDepartments and managers:");
    for dept in departments.indices() {
        let unit = &departments[dept];
        println!("  {dept}: {} - manager {}", unit.name, employees[unit.manager].name);
    }

    println!("\nProjects and teams:");
    for project in &projects {
        let names: Vec<&str> = project.team.iter().map(|member| employees[*member].name).collect();
        println!("  {} - team: {}", project.name, names.join(", "));
        if let Some(lead) = project.team.at(TeamPositionIndex::ZERO) {
            println!("    lead: {}", employees[*lead].name);
        }
    }

    println!("\nDepartment salary totals:");
    let mut totals: BTreeMap<DepartmentIndex, u32> = BTreeMap::new();
    for staff in &employees {
        *totals.entry(staff.department).or_default() += staff.salary;
    }
    for (dept, total) in totals {
        println!("  {}: ${total}", departments[dept].name);
    }

    println!("\nCapabilities of the team container:");
    for name in capability_set!(Vec<EmployeeIndex>).names() {
        print!(" {name}");
    }
    println!();
}
