use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::tempdir;

use slotbook::{
    BookingDraft, BookingLoad, BookingRepository, BookingStatus, CheckAvailabilityUseCase,
    CorruptStorePolicy, CreateBookingUseCase, DailyStatsUseCase, DomainError,
    JsonFileBookingRepository, StaticCatalog,
};

fn june_10() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn draft(provider_id: &str, timeslot: &str) -> BookingDraft {
    BookingDraft::new()
        .with_service("s2")
        .with_provider(provider_id)
        .with_date(june_10())
        .with_timeslot(timeslot)
        .with_customer("Ana", "123", "a@x.com")
}

#[tokio::test]
async fn json_store_missing_file_loads_empty() {
    let dir = tempdir().expect("tempdir");
    let repo = JsonFileBookingRepository::new(dir.path().join("bookings.json"));

    let loaded = repo.load_all().await.expect("load");
    assert_eq!(loaded, BookingLoad::Loaded(Vec::new()));
}

#[tokio::test]
async fn json_store_round_trip_across_instances() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("bookings.json");
    let catalog = Arc::new(StaticCatalog::barbershop());

    let writer = Arc::new(JsonFileBookingRepository::new(&path));
    let create = CreateBookingUseCase::new(writer.clone(), catalog);
    let first = create.execute(&draft("b1", "09:00")).await.expect("first");
    let second = create.execute(&draft("b2", "09:00")).await.expect("second");

    let reader = JsonFileBookingRepository::new(&path);
    let loaded = reader.load_all().await.expect("load");
    assert_eq!(loaded, BookingLoad::Loaded(vec![first, second]));

    let raw = std::fs::read_to_string(&path).expect("read file");
    assert!(raw.contains("\"providerId\": \"b1\""));
    assert!(!dir.path().join("nested").join("bookings.json.tmp").exists());
}

#[tokio::test]
async fn json_store_rejects_double_booking() {
    let dir = tempdir().expect("tempdir");
    let repo = Arc::new(JsonFileBookingRepository::new(dir.path().join("bookings.json")));
    let create = CreateBookingUseCase::new(repo.clone(), Arc::new(StaticCatalog::barbershop()));

    create.execute(&draft("b1", "10:00")).await.expect("first");
    let err = create.execute(&draft("b1", "10:00")).await.unwrap_err();
    assert!(err.is_slot_conflict());

    match repo.load_all().await.expect("load") {
        BookingLoad::Loaded(bookings) => assert_eq!(bookings.len(), 1),
        BookingLoad::Corrupt { reason } => panic!("unexpected corrupt store: {}", reason),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn json_store_serializes_concurrent_writers() {
    let dir = tempdir().expect("tempdir");
    let repo = Arc::new(JsonFileBookingRepository::new(dir.path().join("bookings.json")));
    let create = Arc::new(CreateBookingUseCase::new(
        repo.clone(),
        Arc::new(StaticCatalog::barbershop()),
    ));

    // Two writers race for one slot while others book distinct slots.
    let requests = [
        ("b1", "11:00"),
        ("b1", "11:00"),
        ("b2", "11:00"),
        ("b3", "11:00"),
        ("b4", "11:00"),
    ];
    let mut handles = Vec::new();
    for (provider, slot) in requests {
        let create = create.clone();
        handles.push(tokio::spawn(async move {
            create.execute(&draft(provider, slot)).await
        }));
    }

    let mut conflicts = 0;
    for handle in handles {
        if let Err(e) = handle.await.expect("join") {
            assert!(e.is_slot_conflict(), "unexpected error: {}", e);
            conflicts += 1;
        }
    }
    assert_eq!(conflicts, 1);

    match repo.load_all().await.expect("load") {
        BookingLoad::Loaded(bookings) => assert_eq!(bookings.len(), 4),
        BookingLoad::Corrupt { reason } => panic!("unexpected corrupt store: {}", reason),
    }
}

#[tokio::test]
async fn json_store_reads_legacy_records() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bookings.json");
    std::fs::write(
        &path,
        r#"[{
            "id": "bk_1718000000000",
            "serviceId": "s1",
            "barberId": "b1",
            "serviceName": "Corte Clássico",
            "duration": 30,
            "price": 35,
            "barberName": "Matheus Henrique",
            "date": "2024-06-10",
            "timeslot": "09:30",
            "customer": {"name": "Rui", "phone": "555", "email": "rui@x.com", "createdAt": "2024-06-09T18:22:01.120Z"},
            "status": "confirmado",
            "createdAt": "2024-06-09T18:22:01.121Z"
        }]"#,
    )
    .expect("seed");

    let repo = Arc::new(JsonFileBookingRepository::new(&path));
    let bookings = repo
        .load_all()
        .await
        .expect("load")
        .into_bookings(CorruptStorePolicy::Strict)
        .expect("decodes");
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status(), BookingStatus::Confirmed);
    assert_eq!(bookings[0].service_name(), "Corte Clássico");

    let availability = CheckAvailabilityUseCase::new(repo.clone());
    assert!(!availability.is_available("b1", june_10(), "09:30").await.unwrap());

    // New bookings append after legacy ones.
    let create = CreateBookingUseCase::new(repo.clone(), Arc::new(StaticCatalog::barbershop()));
    create.execute(&draft("b1", "10:00")).await.expect("append");
    let all = repo
        .load_all()
        .await
        .unwrap()
        .into_bookings(CorruptStorePolicy::Strict)
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id(), "bk_1718000000000");
}

#[tokio::test]
async fn json_store_corrupt_content_policies() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bookings.json");
    std::fs::write(&path, "{ this is not json").expect("seed");

    let repo = Arc::new(JsonFileBookingRepository::new(&path));
    assert!(repo.load_all().await.expect("load").is_corrupt());

    let catalog = Arc::new(StaticCatalog::barbershop());

    let strict = DailyStatsUseCase::new(repo.clone(), catalog.clone());
    let err = strict.summarize(june_10()).await.unwrap_err();
    assert!(err.is_storage_corrupt());

    let lenient = DailyStatsUseCase::new(repo.clone(), catalog.clone())
        .with_corrupt_policy(CorruptStorePolicy::Lenient);
    let stats = lenient.summarize(june_10()).await.expect("lenient stats");
    assert_eq!(stats.total_bookings, 0);
    assert_eq!(stats.available_count, 84);

    let create = CreateBookingUseCase::new(repo.clone(), catalog)
        .with_corrupt_policy(CorruptStorePolicy::Lenient);
    let err = create.execute(&draft("b1", "09:00")).await.unwrap_err();
    assert!(matches!(err, DomainError::StorageCorrupt(_)));

    let raw = std::fs::read_to_string(&path).expect("read");
    assert_eq!(raw, "{ this is not json", "corrupt content is never overwritten");
}

#[tokio::test]
async fn json_store_non_utf8_content_is_corrupt() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bookings.json");
    let garbage = [0xff, 0xfe, b'[', b']'];
    std::fs::write(&path, garbage).expect("seed");

    let repo = Arc::new(JsonFileBookingRepository::new(&path));
    assert!(repo.load_all().await.expect("load").is_corrupt());

    let catalog = Arc::new(StaticCatalog::barbershop());

    let err = DailyStatsUseCase::new(repo.clone(), catalog.clone())
        .summarize(june_10())
        .await
        .unwrap_err();
    assert!(err.is_storage_corrupt());

    let stats = DailyStatsUseCase::new(repo.clone(), catalog.clone())
        .with_corrupt_policy(CorruptStorePolicy::Lenient)
        .summarize(june_10())
        .await
        .expect("lenient stats");
    assert_eq!(stats.total_bookings, 0);

    let create = CreateBookingUseCase::new(repo, catalog)
        .with_corrupt_policy(CorruptStorePolicy::Lenient);
    let err = create.execute(&draft("b1", "09:00")).await.unwrap_err();
    assert!(err.is_storage_corrupt());

    assert_eq!(std::fs::read(&path).expect("read"), garbage);
}
