//! Visitor over a closed set of employee kinds.
//!
//! [`Employee::accept`] matches on its own variant and calls the visitor
//! method for that variant (double dispatch without runtime type checks).
//! Every visitor method defaults to [`Visit::Unsupported`], so a visitor only
//! implements the kinds it understands and the rest are reported, not
//! silently changed.

#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    pub name: String,
    pub salary: f64,
    pub vacation_days: u32,
    pub reports: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Engineer {
    pub name: String,
    pub salary: f64,
    pub vacation_days: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Intern {
    pub name: String,
    pub stipend: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Employee {
    Manager(Manager),
    Engineer(Engineer),
    Intern(Intern),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Applied,
    Unsupported,
}

pub trait EmployeeVisitor {
    fn visit_manager(&mut self, _manager: &mut Manager) -> Visit {
        Visit::Unsupported
    }

    fn visit_engineer(&mut self, _engineer: &mut Engineer) -> Visit {
        Visit::Unsupported
    }

    fn visit_intern(&mut self, _intern: &mut Intern) -> Visit {
        Visit::Unsupported
    }
}

impl Employee {
    pub fn name(&self) -> &str {
        match self {
            Employee::Manager(m) => &m.name,
            Employee::Engineer(e) => &e.name,
            Employee::Intern(i) => &i.name,
        }
    }

    pub fn accept(&mut self, visitor: &mut dyn EmployeeVisitor) -> Visit {
        match self {
            Employee::Manager(m) => visitor.visit_manager(m),
            Employee::Engineer(e) => visitor.visit_engineer(e),
            Employee::Intern(i) => visitor.visit_intern(i),
        }
    }
}

/// Raises pay for everyone by `percent`.
pub struct SalaryRaise {
    pub percent: f64,
}

impl SalaryRaise {
    fn factor(&self) -> f64 {
        1.0 + self.percent / 100.0
    }
}

impl EmployeeVisitor for SalaryRaise {
    fn visit_manager(&mut self, manager: &mut Manager) -> Visit {
        manager.salary *= self.factor();
        Visit::Applied
    }

    fn visit_engineer(&mut self, engineer: &mut Engineer) -> Visit {
        engineer.salary *= self.factor();
        Visit::Applied
    }

    fn visit_intern(&mut self, intern: &mut Intern) -> Visit {
        intern.stipend *= self.factor();
        Visit::Applied
    }
}

/// Extra days off; interns have no vacation allowance.
pub struct ExtraVacation {
    pub days: u32,
}

impl EmployeeVisitor for ExtraVacation {
    fn visit_manager(&mut self, manager: &mut Manager) -> Visit {
        manager.vacation_days = manager.vacation_days.saturating_add(self.days);
        Visit::Applied
    }

    fn visit_engineer(&mut self, engineer: &mut Engineer) -> Visit {
        engineer.vacation_days = engineer.vacation_days.saturating_add(self.days);
        Visit::Applied
    }
}

fn staff() -> Vec<Employee> {
    vec![
        Employee::Manager(Manager {
            name: "John".to_string(),
            salary: 10_000.0,
            vacation_days: 10,
            reports: 4,
        }),
        Employee::Engineer(Engineer {
            name: "Mary".to_string(),
            salary: 8_000.0,
            vacation_days: 12,
        }),
        Employee::Intern(Intern {
            name: "Bob".to_string(),
            stipend: 1_500.0,
        }),
    ]
}

pub fn demo() -> Vec<String> {
    let mut employees = staff();
    let mut lines = Vec::new();
    let mut raise = SalaryRaise { percent: 10.0 };
    let mut vacation = ExtraVacation { days: 2 };

    for employee in &mut employees {
        let raised = employee.accept(&mut raise);
        let rested = employee.accept(&mut vacation);
        lines.push(format!(
            "{}: raise {:?}, vacation {:?}",
            employee.name(),
            raised,
            rested
        ));
    }
    lines
}
