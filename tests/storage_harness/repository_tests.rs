//! Macro-generated repository contract tests.
//!
//! # Generated Tests
//!
//! ## Employees
//! - `test_employee_add_and_get`: ids are assigned, fields round-trip
//! - `test_employee_get_by_email`: exact match, missing email is `None`
//! - `test_employee_duplicate_email`: unique violation on `employees_email_key`
//! - `test_employee_update_and_remove`: `false` for unknown ids
//!
//! ## Seats
//! - `test_seat_get_all_ordered`: ordered by seat number
//! - `test_seat_duplicate_number`: unique violation on `seats_seat_number_key`
//! - `test_seat_available_on_date`: booked seats are excluded
//!
//! ## Bookings
//! - `test_booking_add_and_lookups`: by id, by id and date, by date
//! - `test_booking_same_seat_same_day`: unique violation on `bookings_seat_date_key`
//! - `test_booking_missing_references`: foreign key violations
//! - `test_booking_by_employee_and_range`: ordering and inclusive bounds
//! - `test_booking_update_and_remove`
//! - `test_cascade_on_employee_and_seat_removal`
//! - `test_concurrent_bookings_one_winner`: parallel writers for one slot

/// Generate the repository contract suite.
///
/// `$factory` must evaluate to a store implementing all three repository
/// traits plus `Clone + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! repository_tests {
    ($factory:expr) => {
        mod repository_contract_tests {
            use super::*;
            use seatbook::core::StorageError;
            use seatbook::core::repository::{
                BOOKING_EMPLOYEE_FK, BOOKING_SEAT_DATE_UNIQUE, BOOKING_SEAT_FK,
                BookingRepository, EMPLOYEE_EMAIL_UNIQUE, EmployeeRepository,
                SEAT_NUMBER_UNIQUE, SeatRepository,
            };

            // ==================================================================
            // Employees
            // ==================================================================

            #[tokio::test]
            async fn test_employee_add_and_get() {
                let store = $factory;
                let created = EmployeeRepository::add(&store, employee("Ada", "ada@test.com"))
                    .await
                    .unwrap();
                assert!(created.employee_id() > 0);

                let fetched = EmployeeRepository::get_by_id(&store, created.employee_id())
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(fetched, created);
                assert_eq!(fetched.name(), "Ada");

                assert!(EmployeeRepository::get_by_id(&store, 9999).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_employee_get_by_email() {
                let store = $factory;
                let created = EmployeeRepository::add(&store, employee("Ada", "ada@test.com"))
                    .await
                    .unwrap();

                let found = store.get_by_email("ada@test.com").await.unwrap();
                assert_eq!(found.map(|e| e.employee_id()), Some(created.employee_id()));
                assert!(store.get_by_email("bob@test.com").await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_employee_duplicate_email() {
                let store = $factory;
                EmployeeRepository::add(&store, employee("Ada", "same@test.com"))
                    .await
                    .unwrap();
                let err = EmployeeRepository::add(&store, employee("Bob", "same@test.com"))
                    .await
                    .unwrap_err();
                assert!(matches!(err, StorageError::UniqueViolation { .. }));
                assert_eq!(err.constraint(), Some(EMPLOYEE_EMAIL_UNIQUE));
            }

            #[tokio::test]
            async fn test_employee_update_and_remove() {
                let store = $factory;
                let created = EmployeeRepository::add(&store, employee("Ada", "ada@test.com"))
                    .await
                    .unwrap();
                assert!(EmployeeRepository::update(&store, &created).await.unwrap());
                assert!(EmployeeRepository::remove(&store, created.employee_id()).await.unwrap());
                assert!(!EmployeeRepository::remove(&store, created.employee_id()).await.unwrap());
                assert!(!EmployeeRepository::update(&store, &created).await.unwrap());
                assert!(EmployeeRepository::get_all(&store).await.unwrap().is_empty());
            }

            // ==================================================================
            // Seats
            // ==================================================================

            #[tokio::test]
            async fn test_seat_get_all_ordered() {
                let store = $factory;
                for n in [40, 2, 17] {
                    SeatRepository::add(&store, seat(n)).await.unwrap();
                }
                let numbers: Vec<i32> = SeatRepository::get_all(&store)
                    .await
                    .unwrap()
                    .iter()
                    .map(|s| s.seat_number())
                    .collect();
                assert_eq!(numbers, vec![2, 17, 40]);
            }

            #[tokio::test]
            async fn test_seat_duplicate_number() {
                let store = $factory;
                SeatRepository::add(&store, seat(1)).await.unwrap();
                let err = SeatRepository::add(&store, seat(1)).await.unwrap_err();
                assert_eq!(err.constraint(), Some(SEAT_NUMBER_UNIQUE));
            }

            #[tokio::test]
            async fn test_seat_available_on_date() {
                let store = $factory;
                let ada = EmployeeRepository::add(&store, employee("Ada", "ada@test.com"))
                    .await
                    .unwrap();
                let s1 = SeatRepository::add(&store, seat(1)).await.unwrap();
                let s2 = SeatRepository::add(&store, seat(2)).await.unwrap();
                BookingRepository::add(&store, booking(ada.employee_id(), s1.seat_id(), in_days(1)))
                    .await
                    .unwrap();

                let free: Vec<i32> = store
                    .get_available_on_date(in_days(1))
                    .await
                    .unwrap()
                    .iter()
                    .map(|s| s.seat_id())
                    .collect();
                assert_eq!(free, vec![s2.seat_id()]);
                assert_eq!(store.get_available_on_date(in_days(2)).await.unwrap().len(), 2);
            }

            // ==================================================================
            // Bookings
            // ==================================================================

            #[tokio::test]
            async fn test_booking_add_and_lookups() {
                let store = $factory;
                let ada = EmployeeRepository::add(&store, employee("Ada", "ada@test.com"))
                    .await
                    .unwrap();
                let s = SeatRepository::add(&store, seat(10)).await.unwrap();
                let created = BookingRepository::add(
                    &store,
                    booking(ada.employee_id(), s.seat_id(), in_days(3)),
                )
                .await
                .unwrap();
                assert!(created.booking_id() > 0);

                let by_id = BookingRepository::get_by_id(&store, created.booking_id())
                    .await
                    .unwrap();
                assert_eq!(by_id.as_ref(), Some(&created));

                let by_id_and_date = store
                    .get_by_id_and_date(created.booking_id(), in_days(3))
                    .await
                    .unwrap();
                assert_eq!(by_id_and_date, Some(created.clone()));
                assert!(store
                    .get_by_id_and_date(created.booking_id(), in_days(4))
                    .await
                    .unwrap()
                    .is_none());

                assert_eq!(store.get_by_date(in_days(3)).await.unwrap(), vec![created]);
                assert!(store.get_by_date(in_days(4)).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_booking_same_seat_same_day() {
                let store = $factory;
                let ada = EmployeeRepository::add(&store, employee("Ada", "ada@test.com"))
                    .await
                    .unwrap();
                let bob = EmployeeRepository::add(&store, employee("Bob", "bob@test.com"))
                    .await
                    .unwrap();
                let s = SeatRepository::add(&store, seat(10)).await.unwrap();
                BookingRepository::add(&store, booking(ada.employee_id(), s.seat_id(), in_days(1)))
                    .await
                    .unwrap();
                let err = BookingRepository::add(
                    &store,
                    booking(bob.employee_id(), s.seat_id(), in_days(1)),
                )
                .await
                .unwrap_err();
                assert_eq!(err.constraint(), Some(BOOKING_SEAT_DATE_UNIQUE));
            }

            #[tokio::test]
            async fn test_booking_missing_references() {
                let store = $factory;
                let s = SeatRepository::add(&store, seat(10)).await.unwrap();
                let err = BookingRepository::add(&store, booking(9999, s.seat_id(), in_days(1)))
                    .await
                    .unwrap_err();
                assert!(matches!(err, StorageError::ForeignKeyViolation { .. }));
                assert_eq!(err.constraint(), Some(BOOKING_EMPLOYEE_FK));

                let ada = EmployeeRepository::add(&store, employee("Ada", "ada@test.com"))
                    .await
                    .unwrap();
                let err = BookingRepository::add(&store, booking(ada.employee_id(), 9999, in_days(1)))
                    .await
                    .unwrap_err();
                assert_eq!(err.constraint(), Some(BOOKING_SEAT_FK));
            }

            #[tokio::test]
            async fn test_booking_by_employee_and_range() {
                let store = $factory;
                let ada = EmployeeRepository::add(&store, employee("Ada", "ada@test.com"))
                    .await
                    .unwrap();
                let bob = EmployeeRepository::add(&store, employee("Bob", "bob@test.com"))
                    .await
                    .unwrap();
                let s = SeatRepository::add(&store, seat(10)).await.unwrap();
                for offset in [9, 0, 29, 4] {
                    BookingRepository::add(
                        &store,
                        booking(ada.employee_id(), s.seat_id(), in_days(offset)),
                    )
                    .await
                    .unwrap();
                }
                BookingRepository::add(&store, booking(bob.employee_id(), s.seat_id(), in_days(5)))
                    .await
                    .unwrap();

                let dates: Vec<_> = store
                    .get_by_employee(ada.employee_id())
                    .await
                    .unwrap()
                    .iter()
                    .map(|b| b.booking_date())
                    .collect();
                assert_eq!(dates, vec![in_days(0), in_days(4), in_days(9), in_days(29)]);

                let range: Vec<_> = store
                    .get_between(in_days(4), in_days(9))
                    .await
                    .unwrap()
                    .iter()
                    .map(|b| b.booking_date())
                    .collect();
                assert_eq!(range, vec![in_days(4), in_days(5), in_days(9)]);
            }

            #[tokio::test]
            async fn test_booking_update_and_remove() {
                let store = $factory;
                let ada = EmployeeRepository::add(&store, employee("Ada", "ada@test.com"))
                    .await
                    .unwrap();
                let s = SeatRepository::add(&store, seat(10)).await.unwrap();
                let created = BookingRepository::add(
                    &store,
                    booking(ada.employee_id(), s.seat_id(), in_days(1)),
                )
                .await
                .unwrap();

                assert!(BookingRepository::update(&store, &created).await.unwrap());
                assert!(BookingRepository::remove(&store, created.booking_id()).await.unwrap());
                assert!(!BookingRepository::remove(&store, created.booking_id()).await.unwrap());
                assert!(!BookingRepository::update(&store, &created).await.unwrap());
            }

            #[tokio::test]
            async fn test_cascade_on_employee_and_seat_removal() {
                let store = $factory;
                let ada = EmployeeRepository::add(&store, employee("Ada", "ada@test.com"))
                    .await
                    .unwrap();
                let s1 = SeatRepository::add(&store, seat(1)).await.unwrap();
                let s2 = SeatRepository::add(&store, seat(2)).await.unwrap();
                let b1 = BookingRepository::add(
                    &store,
                    booking(ada.employee_id(), s1.seat_id(), in_days(1)),
                )
                .await
                .unwrap();
                let b2 = BookingRepository::add(
                    &store,
                    booking(ada.employee_id(), s2.seat_id(), in_days(2)),
                )
                .await
                .unwrap();

                assert!(SeatRepository::remove(&store, s1.seat_id()).await.unwrap());
                assert!(BookingRepository::get_by_id(&store, b1.booking_id()).await.unwrap().is_none());
                assert!(BookingRepository::get_by_id(&store, b2.booking_id()).await.unwrap().is_some());

                assert!(EmployeeRepository::remove(&store, ada.employee_id()).await.unwrap());
                assert!(BookingRepository::get_by_id(&store, b2.booking_id()).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_concurrent_bookings_one_winner() {
                let store = $factory;
                let s = SeatRepository::add(&store, seat(10)).await.unwrap();
                let mut ids = Vec::new();
                for i in 0..8 {
                    let e = EmployeeRepository::add(
                        &store,
                        employee("Racer", &format!("racer{}@test.com", i)),
                    )
                    .await
                    .unwrap();
                    ids.push(e.employee_id());
                }

                let mut handles = Vec::new();
                for employee_id in ids {
                    let store = store.clone();
                    let seat_id = s.seat_id();
                    handles.push(tokio::spawn(async move {
                        BookingRepository::add(&store, booking(employee_id, seat_id, in_days(2)))
                            .await
                            .is_ok()
                    }));
                }

                let mut winners = 0;
                for handle in handles {
                    if handle.await.unwrap() {
                        winners += 1;
                    }
                }
                assert_eq!(winners, 1);
                assert_eq!(store.get_by_date(in_days(2)).await.unwrap().len(), 1);
            }
        }
    };
}
