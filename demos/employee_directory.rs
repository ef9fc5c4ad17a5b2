//! Walks through the directory: shared raise factors, the record parser,
//! workdays, developers and managers, and the two representations.
//!
//! Run with `RUST_LOG=employee_directory=debug` to see the directory's own
//! logging alongside the output.

use chrono::NaiveDate;
use employee_directory::{
    error::{Error, Result},
    Directory,
    Employee,
    EmployeeID,
    EmployeeKind,
};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn employee<'a>(directory: &'a Directory, id: &EmployeeID) -> Result<&'a Employee> {
    directory.get(id).ok_or_else(|| Error::EmployeeNotFound(id.to_string()))
}

fn print_reports(directory: &Directory, manager: &EmployeeID) {
    for name in directory.list_reports(manager).into_iter().flatten() {
        println!("--> {}", name);
    }
}

fn example() -> Result<()> {
    let mut directory = Directory::default();
    let emp_1 = directory.hire("Adam", "Wicks", 50000)?;
    let emp_2 = directory.hire("Test", "User", 60000)?;

    println!("Printing the raise amounts");
    println!("{}", directory.config().factor_for(EmployeeKind::Employee));
    println!("{}", directory.raise_factor(&emp_1)?);
    println!("{}", directory.raise_factor(&emp_2)?);

    println!("\nModifying the shared raise amount and printing to see the results");
    directory.set_raise_amount(dec!(1.05));
    println!("{}", directory.config().factor_for(EmployeeKind::Employee));
    println!("{}", directory.raise_factor(&emp_1)?);
    println!("{}", directory.raise_factor(&emp_2)?);

    println!("\nUsing the record parser to create new employees");
    let emp_3 = directory.hire_from_str("John-Doe-70000")?;
    directory.hire_from_str("Steve-Smith-30000")?;
    directory.hire_from_str("Jane-Doe-90000")?;
    println!("{}", employee(&directory, &emp_3)?.email());
    println!("{}", employee(&directory, &emp_3)?.pay());

    println!("\nChecking workdays");
    let wednesday = NaiveDate::from_ymd_opt(2022, 12, 7).unwrap();
    let saturday = NaiveDate::from_ymd_opt(2022, 10, 15).unwrap();
    println!("7/12/2022 (Wednesday): {}", Employee::is_workday(&wednesday));
    println!("15/10/2022 (Saturday): {}", Employee::is_workday(&saturday));
    let today = employee_directory::today();
    println!("Today ({}): {}", today, employee_directory::is_workday(&today));

    let dev_1 = directory.hire_developer("Alan", "Turing", 100000, "Machine Language")?;
    println!("\nCreating a developer");
    let dev = employee(&directory, &dev_1)?;
    println!("Email: {}", dev.email());
    if let Some(info) = dev.developer() {
        println!("Programming Language: {}", info.language());
    }

    println!("\nRaising pay using the developer's own raise factor");
    println!("{}", employee(&directory, &dev_1)?.pay());
    directory.apply_raise(&dev_1)?;
    println!("{}", employee(&directory, &dev_1)?.pay());

    let mgr_1 = directory.hire_manager("Sue", "Smith", 90000, Some(vec![emp_1.clone(), emp_2.clone(), emp_3.clone()]))?;
    println!("\nCreating a manager");
    println!("Email: {}", employee(&directory, &mgr_1)?.email());

    println!("\nListing reports");
    print_reports(&directory, &mgr_1);
    if let Some(manager) = directory.manager_mut(&mgr_1) {
        manager.add_report(&dev_1);
    }
    println!("\nAdd a developer to the team");
    print_reports(&directory, &mgr_1);
    println!("\nRemove an employee from the team");
    if let Some(manager) = directory.manager_mut(&mgr_1) {
        manager.remove_report(&emp_1);
    }
    print_reports(&directory, &mgr_1);

    println!("\nChecking kinds");
    let mgr = employee(&directory, &mgr_1)?;
    println!("Is mgr_1 an employee: {}", mgr.is_instance_of(EmployeeKind::Employee));
    println!("Is mgr_1 a manager: {}", mgr.is_instance_of(EmployeeKind::Manager));
    println!("Is mgr_1 a developer: {}", mgr.is_instance_of(EmployeeKind::Developer));

    println!("\nChecking kind relationships");
    let pairs = vec![
        (EmployeeKind::Employee, EmployeeKind::Employee),
        (EmployeeKind::Manager, EmployeeKind::Employee),
        (EmployeeKind::Manager, EmployeeKind::Manager),
        (EmployeeKind::Manager, EmployeeKind::Developer),
        (EmployeeKind::Employee, EmployeeKind::Manager),
    ];
    for (kind, other) in pairs {
        println!("{}, {}: {}", kind, other, kind.is_subkind_of(other));
    }

    println!("\nRepresentations");
    let emp = employee(&directory, &emp_1)?;
    println!("repr: {}", emp.repr());
    println!("display: {}", emp);

    println!("\nJohn Doe's details");
    let john = employee(&directory, &emp_3)?;
    println!("First: {}", john.first());
    println!("Email: {}", john.email());
    println!("Fullname: {}", john.fullname());
    println!("\nJohn Doe is changing their name.");
    directory.set_fullname(&emp_3, "Joe Bloggs")?;
    let john = employee(&directory, &emp_3)?;
    println!("First: {}", john.first());
    println!("Email: {}", john.email());
    println!("Fullname: {}", john.fullname());

    println!("\nTotal employees: {}", directory.total_employees());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    if let Err(e) = example() {
        tracing::error!("directory tour failed: {}", e);
        std::process::exit(1);
    }
}
