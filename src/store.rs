use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{Employee, EmployeeInput};

struct Inner {
    employees: Vec<Employee>,
    next_id: i64,
}

/// In-memory employee store shared across handlers
///
/// One mutex guards both the collection and the id counter, so mutations
/// are serialized. Ids are monotonically increasing and never reused, even
/// after a delete. The collection keeps insertion order.
#[derive(Clone)]
pub struct EmployeeStore {
    inner: Arc<Mutex<Inner>>,
}

impl EmployeeStore {
    /// Empty store with the id counter at zero
    pub fn new() -> Self {
        EmployeeStore {
            inner: Arc::new(Mutex::new(Inner {
                employees: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Store pre-loaded with the two example records (ids 0 and 1)
    pub fn seeded() -> Self {
        let store = EmployeeStore::new();

        tracing::info!("Seeding example employee records");
        let seeds = [
            ("Tina Lee", "tinalee9@gmail.com", "0978482123", "Project Manager"),
            ("Julien Nguyen", "juliennguyen@gmail.com", "0789328189", "Developer"),
        ];
        for (name, email, phone_number, job_title) in seeds {
            let _ = store.insert(EmployeeInput {
                id: None,
                name: name.to_string(),
                email: email.to_string(),
                phone_number: phone_number.to_string(),
                job_title: job_title.to_string(),
            });
        }

        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a poisoned lock still holds valid data
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assign the next id and append the record
    ///
    /// `None` signals a rejected append; any `id` in the input is ignored.
    pub fn insert(&self, input: EmployeeInput) -> Option<Employee> {
        let mut inner = self.lock();

        let id = inner.next_id;
        inner.next_id += 1;

        let employee = Employee {
            id,
            name: input.name,
            email: input.email,
            phone_number: input.phone_number,
            job_title: input.job_title,
        };
        inner.employees.push(employee.clone());

        Some(employee)
    }

    /// Snapshot of the full collection in insertion order
    pub fn list(&self) -> Vec<Employee> {
        self.lock().employees.clone()
    }

    /// Linear scan for the employee with `id`
    pub fn get(&self, id: i64) -> Option<Employee> {
        self.lock().employees.iter().find(|e| e.id == id).cloned()
    }

    /// Overwrite the mutable fields of the employee with `id` in place
    ///
    /// The stored id and the record's position are untouched; any `id` in
    /// the input is ignored. `None` if no employee has `id`.
    pub fn update(&self, id: i64, input: EmployeeInput) -> Option<Employee> {
        let mut inner = self.lock();

        let employee = inner.employees.iter_mut().find(|e| e.id == id)?;
        employee.name = input.name;
        employee.email = input.email;
        employee.phone_number = input.phone_number;
        employee.job_title = input.job_title;

        Some(employee.clone())
    }

    /// Remove the employee with `id`
    ///
    /// `None` if no employee has `id`, otherwise whether the removal took
    /// effect. The id counter is not decremented.
    pub fn remove(&self, id: i64) -> Option<bool> {
        let mut inner = self.lock();

        let pos = inner.employees.iter().position(|e| e.id == id)?;
        inner.employees.remove(pos);

        Some(true)
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        EmployeeStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> EmployeeInput {
        EmployeeInput {
            id: None,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone_number: "555-0100".to_string(),
            job_title: "Engineer".to_string(),
        }
    }

    #[test]
    fn test_seeded_store_has_example_records() {
        let store = EmployeeStore::seeded();
        let employees = store.list();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].id, 0);
        assert_eq!(employees[0].name, "Tina Lee");
        assert_eq!(employees[1].id, 1);
        assert_eq!(employees[1].name, "Julien Nguyen");
    }

    #[test]
    fn test_insert_assigns_monotonic_ids() {
        let store = EmployeeStore::new();

        let a = store.insert(input("Ann")).unwrap();
        let b = store.insert(input("Bob")).unwrap();

        assert_eq!(a.id, 0);
        assert_eq!(b.id, 1);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_insert_ignores_client_supplied_id() {
        let store = EmployeeStore::new();

        let mut payload = input("Ann");
        payload.id = Some(42);
        let employee = store.insert(payload).unwrap();

        assert_eq!(employee.id, 0);
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let store = EmployeeStore::new();

        let a = store.insert(input("Ann")).unwrap();
        assert_eq!(store.remove(a.id), Some(true));

        let b = store.insert(input("Bob")).unwrap();
        assert_eq!(b.id, 1);
    }

    #[test]
    fn test_get_finds_by_id() {
        let store = EmployeeStore::seeded();

        let found = store.get(1).unwrap();
        assert_eq!(found.name, "Julien Nguyen");
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_update_overwrites_fields_in_place() {
        let store = EmployeeStore::seeded();

        let mut payload = input("Renamed");
        payload.id = Some(500);
        let updated = store.update(0, payload).unwrap();

        assert_eq!(updated.id, 0);
        assert_eq!(updated.name, "Renamed");

        // order and ids unchanged
        let employees = store.list();
        assert_eq!(employees[0].id, 0);
        assert_eq!(employees[0].name, "Renamed");
        assert_eq!(employees[1].id, 1);
    }

    #[test]
    fn test_update_missing_id_leaves_store_unchanged() {
        let store = EmployeeStore::seeded();
        let before = store.list();

        assert!(store.update(99, input("Ghost")).is_none());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_remove_preserves_order_of_remaining() {
        let store = EmployeeStore::new();
        for name in ["Ann", "Bob", "Cal"] {
            let _ = store.insert(input(name));
        }

        assert_eq!(store.remove(1), Some(true));
        assert_eq!(store.remove(1), None);

        let ids: Vec<i64> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }
}
