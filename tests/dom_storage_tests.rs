//! Storage helper tests against in-memory storage areas

#[cfg(not(target_arch = "wasm32"))]
mod storage_tests {
	use std::collections::HashMap;

	use razor::dom::testing::{MockStorage, MockStorageProvider};
	use razor::dom::{
		DomError, StorageArea, read_state_in, read_untyped_state, write_state_in,
		write_untyped_state,
	};
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn provider() -> MockStorageProvider {
		MockStorageProvider::new()
	}

	#[rstest]
	#[case(StorageArea::Persistent)]
	#[case(StorageArea::Session)]
	fn test_round_trip_in_area(provider: MockStorageProvider, #[case] area: StorageArea) {
		write_state_in(&provider, "k", "v", area).unwrap();
		assert_eq!(read_state_in(&provider, "k", area).unwrap(), Some("v".to_string()));
	}

	#[rstest]
	fn test_session_flag_isolates_areas(provider: MockStorageProvider) {
		let persistent = StorageArea::from_session_flag(false);
		let session = StorageArea::from_session_flag(true);

		write_state_in(&provider, "k", "persistent", persistent).unwrap();
		assert_eq!(read_state_in(&provider, "k", session).unwrap(), None);

		write_state_in(&provider, "k", "session", session).unwrap();
		assert_eq!(
			read_state_in(&provider, "k", persistent).unwrap().as_deref(),
			Some("persistent")
		);
	}

	#[rstest]
	fn test_preexisting_entries_are_readable() {
		let persistent = MockStorage::with_data(HashMap::from([(
			"theme".to_string(),
			"dark".to_string(),
		)]));
		let provider = MockStorageProvider::with_areas(persistent, MockStorage::new());

		assert_eq!(
			read_state_in(&provider, "theme", StorageArea::default()).unwrap().as_deref(),
			Some("dark")
		);
		assert_eq!(read_state_in(&provider, "missing", StorageArea::default()).unwrap(), None);
	}

	#[rstest]
	#[case(json!(1), json!("v"))]
	#[case(json!("k"), json!(2))]
	fn test_untyped_write_rejected_before_storage(
		provider: MockStorageProvider,
		#[case] key: serde_json::Value,
		#[case] value: serde_json::Value,
	) {
		let err = write_untyped_state(&provider, &key, &value, StorageArea::Persistent).unwrap_err();

		assert_eq!(err, DomError::InvalidArgument("both key and value must be strings"));
		assert_eq!(provider.storage_requests(), 0);
		assert_eq!(provider.persistent().length(), 0);
	}

	#[rstest]
	fn test_untyped_read_rejected_before_storage(provider: MockStorageProvider) {
		let err = read_untyped_state(&provider, &json!(false), StorageArea::Session).unwrap_err();

		assert_eq!(err, DomError::InvalidArgument("key must be a string"));
		assert_eq!(provider.session().accesses(), 0);
	}

	#[rstest]
	fn test_quota_failure_propagates() {
		let provider =
			MockStorageProvider::with_areas(MockStorage::new().with_quota(4), MockStorage::new());

		let err = write_state_in(&provider, "key", "value", StorageArea::Persistent).unwrap_err();

		match err {
			DomError::Storage { area, source } => {
				assert_eq!(area, StorageArea::Persistent);
				assert_eq!(source.name, "QuotaExceededError");
			}
			other => panic!("unexpected error: {other:?}"),
		}
		// the other area is unaffected
		write_state_in(&provider, "key", "value", StorageArea::Session).unwrap();
	}
}
