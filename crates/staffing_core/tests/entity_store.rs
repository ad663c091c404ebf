use staffing_core::{InMemoryStaffRepository, Job, RepoError, StaffRepository, Worker};

#[test]
fn seed_state_matches_fixed_dataset() {
    let repo = InMemoryStaffRepository::new();

    let job_names: Vec<(u64, &str)> = repo
        .jobs()
        .iter()
        .map(|job| (job.id, job.name.as_str()))
        .collect();
    assert_eq!(
        job_names,
        vec![
            (0, "Software Engineer"),
            (1, "Database Manager"),
            (2, "System Administrator"),
        ]
    );

    let workers: Vec<(u64, &str, Option<u64>, f64)> = repo
        .workers()
        .iter()
        .map(|worker| (worker.id, worker.name.as_str(), worker.job_id, worker.salary))
        .collect();
    assert_eq!(
        workers,
        vec![
            (0, "Alice", Some(0), 40_000.0),
            (1, "Bob", Some(1), 30_000.0),
            (2, "Carol", Some(2), 50_000.0),
            (3, "David", Some(0), 39_000.0),
        ]
    );

    let engineer = repo.find_job(0).unwrap();
    assert_eq!(engineer.worker_count, 2);
    assert_eq!(engineer.salary_sum, 79_000.0);
    assert_eq!(repo.average_salary(0), Some(39_500.0));
    assert_eq!(repo.next_worker_id(), 4);
    assert_eq!(repo.next_job_id(), 3);
}

#[test]
fn reset_discards_changes_and_restores_counters() {
    let mut repo = InMemoryStaffRepository::new();
    repo.add_job("Tester");
    repo.add_worker("Eve", Some(1), 20_000.0);
    repo.remove_worker(0);
    repo.remove_job(2);

    repo.reset();

    assert_eq!(repo.jobs().len(), 3);
    assert_eq!(repo.workers().len(), 4);
    assert_eq!(repo.next_worker_id(), 4);
    assert_eq!(repo.next_job_id(), 3);
    assert_eq!(repo.find_job(1).unwrap().worker_count, 1);
    assert_eq!(repo.find_worker(0).unwrap().name, "Alice");
}

#[test]
fn find_returns_none_for_unknown_ids() {
    let repo = InMemoryStaffRepository::new();
    assert!(repo.find_worker(99).is_none());
    assert!(repo.find_job(99).is_none());
    assert_eq!(repo.average_salary(99), None);
}

#[test]
fn add_worker_assigns_increasing_ids_never_reused() {
    let mut repo = InMemoryStaffRepository::new();

    let first = repo.add_worker("Eve", Some(1), 31_000.0);
    let second = repo.add_worker("Frank", None, 25_000.0);
    assert_eq!(first.id, 4);
    assert_eq!(second.id, 5);

    repo.remove_worker(second.id);
    let third = repo.add_worker("Grace", Some(2), 52_000.0);
    assert_eq!(third.id, 6);
    assert_eq!(repo.find_worker(third.id), Some(&third));
}

#[test]
fn remove_worker_then_lookup_is_none_and_second_remove_is_noop() {
    let mut repo = InMemoryStaffRepository::new();

    let removed = repo.remove_worker(1).unwrap();
    assert_eq!(removed.name, "Bob");
    assert!(repo.find_worker(1).is_none());
    assert_eq!(repo.find_job(1).unwrap().worker_count, 0);
    assert_eq!(repo.average_salary(1), None);

    assert!(repo.remove_worker(1).is_none());
    assert_eq!(repo.workers().len(), 3);
    assert_eq!(repo.find_job(1).unwrap().salary_sum, 0.0);
}

#[test]
fn removing_job_leaves_orphaned_workers_with_dangling_reference() {
    let mut repo = InMemoryStaffRepository::new();

    let removed = repo.remove_job(0).unwrap();
    assert_eq!(removed.worker_count, 2);
    assert!(repo.find_job(0).is_none());

    let alice = repo.find_worker(0).unwrap().clone();
    assert_eq!(alice.job_id, Some(0));
    assert_eq!(alice.salary, 40_000.0);
    assert!(repo.job_of(&alice).is_none());

    // Removing an orphan must not touch other jobs.
    let before: Vec<Job> = repo.jobs().to_vec();
    assert!(repo.remove_worker(alice.id).is_some());
    assert_eq!(repo.jobs(), before.as_slice());
}

#[test]
fn removed_job_id_is_not_reused() {
    let mut repo = InMemoryStaffRepository::new();
    repo.remove_job(2);

    let job = repo.add_job("Support");
    assert_eq!(job.id, 3);
    assert!(repo.job_of(repo.find_worker(2).unwrap()).is_none());
}

#[test]
fn update_job_upserts_with_next_sequential_id() {
    let mut repo = InMemoryStaffRepository::new();

    let mut payload = Job::new(42, "Data Scientist");
    payload.salary_sum = 1_000.0;
    payload.worker_count = 9;
    let created = repo.update_job(&payload);

    assert_eq!(created.id, 3);
    assert_eq!(created.name, "Data Scientist");
    assert_eq!(created.worker_count, 0);
    assert_eq!(created.salary_sum, 0.0);
    assert!(repo.find_job(42).is_none());
}

#[test]
fn update_job_on_existing_id_renames_only() {
    let mut repo = InMemoryStaffRepository::new();

    let mut payload = Job::new(0, "Platform Engineer");
    payload.worker_count = 0;
    let updated = repo.update_job(&payload);

    assert_eq!(updated.name, "Platform Engineer");
    assert_eq!(updated.worker_count, 2);
    assert_eq!(updated.salary_sum, 79_000.0);
    assert_eq!(repo.jobs().len(), 3);
}

#[test]
fn update_worker_upserts_with_fresh_id() {
    let mut repo = InMemoryStaffRepository::new();

    let created = repo.update_worker(&Worker::new(77, "Heidi", Some(2), 45_000.0));

    assert_eq!(created.id, 4);
    assert!(repo.find_worker(77).is_none());
    let admin = repo.find_job(2).unwrap();
    assert_eq!(admin.worker_count, 2);
    assert_eq!(admin.salary_sum, 95_000.0);
}

#[test]
fn replace_worker_on_missing_id_is_not_found() {
    let mut repo = InMemoryStaffRepository::new();

    let err = repo
        .replace_worker(&Worker::new(12, "Ivan", None, 1.0))
        .unwrap_err();
    assert_eq!(err, RepoError::WorkerNotFound(12));
    assert_eq!(err.to_string(), "worker not found: 12");
    assert_eq!(repo.workers().len(), 4);
    assert_eq!(repo.next_worker_id(), 4);
}

#[test]
fn replace_worker_overwrites_fields_in_place() {
    let mut repo = InMemoryStaffRepository::new();

    let replaced = repo
        .replace_worker(&Worker::new(1, "Robert", Some(1), 33_000.0))
        .unwrap();

    assert_eq!(replaced.id, 1);
    assert_eq!(repo.find_worker(1).unwrap().name, "Robert");
    assert_eq!(repo.workers()[1].id, 1);
    assert_eq!(repo.find_job(1).unwrap().salary_sum, 33_000.0);
}

#[test]
fn job_summaries_cover_every_job_in_order() {
    let mut repo = InMemoryStaffRepository::new();
    repo.add_job("Intern Pool");

    let summaries = repo.job_summaries();
    assert_eq!(summaries.len(), 4);
    assert_eq!(summaries[0].average_salary, Some(39_500.0));
    assert_eq!(summaries[1].average_salary, Some(30_000.0));
    assert_eq!(summaries[2].average_salary, Some(50_000.0));
    assert_eq!(summaries[3].name, "Intern Pool");
    assert_eq!(summaries[3].average_salary, None);
}
