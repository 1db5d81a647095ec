use std::sync::{Arc, Barrier};
use std::thread;

use prefkit::{EditorRegistry, MemoryStore, PreferenceStore, Preferences};

const THREADS: usize = 8;

fn shared_facade(store: &MemoryStore) -> Arc<Preferences> {
	Arc::new(Preferences::new(
		Arc::new(store.clone()),
		Arc::new(EditorRegistry::new()),
	))
}

#[test]
fn racing_requests_for_one_key_share_an_editor() {
	let prefs = shared_facade(&MemoryStore::new());
	let barrier = Arc::new(Barrier::new(THREADS));

	let editors: Vec<_> = (0..THREADS)
		.map(|_| {
			let prefs = Arc::clone(&prefs);
			let barrier = Arc::clone(&barrier);
			thread::spawn(move || {
				barrier.wait();
				prefs.int_editor("count").unwrap()
			})
		})
		.map(|handle| handle.join().unwrap())
		.collect::<Vec<_>>();

	let first = &editors[0];
	assert!(editors.iter().all(|e| Arc::ptr_eq(first, e)));
	assert_eq!(prefs.registry().len(), 1);
}

#[test]
fn distinct_keys_never_conflict() {
	let prefs = shared_facade(&MemoryStore::new());
	let barrier = Arc::new(Barrier::new(THREADS));

	let handles: Vec<_> = (0..THREADS)
		.map(|i| {
			let prefs = Arc::clone(&prefs);
			let barrier = Arc::clone(&barrier);
			thread::spawn(move || {
				barrier.wait();
				let key = format!("key-{i}");
				if i % 2 == 0 {
					prefs.long_editor(&key).map(drop)
				} else {
					prefs.string_editor(&key).map(drop)
				}
			})
		})
		.collect();

	for handle in handles {
		handle.join().unwrap().unwrap();
	}
	assert_eq!(prefs.registry().len(), THREADS);
}

#[test]
fn concurrent_writes_and_commits_lose_nothing() {
	const WRITES: usize = 200;

	let store = MemoryStore::new();
	let prefs = shared_facade(&store);
	let barrier = Arc::new(Barrier::new(THREADS + 1));

	let writers: Vec<_> = (0..THREADS)
		.map(|i| {
			let prefs = Arc::clone(&prefs);
			let barrier = Arc::clone(&barrier);
			thread::spawn(move || {
				let editor = prefs.int_editor(&format!("writer-{i}")).unwrap();
				barrier.wait();
				for n in 1..=WRITES {
					editor.set(n as i32);
				}
			})
		})
		.collect();

	let committer = {
		let prefs = Arc::clone(&prefs);
		let barrier = Arc::clone(&barrier);
		thread::spawn(move || {
			barrier.wait();
			for _ in 0..WRITES {
				prefs.commit();
			}
		})
	};

	for handle in writers {
		handle.join().unwrap();
	}
	committer.join().unwrap();
	prefs.commit();

	for i in 0..THREADS {
		assert_eq!(store.read_int(&format!("writer-{i}"), 0), WRITES as i32);
	}
	assert!(!prefs.has_pending());
}

#[test]
fn editors_are_usable_across_threads() {
	let store = MemoryStore::new();
	let prefs = shared_facade(&store);
	let flag = prefs.bool_editor("flag").unwrap();

	let setter = {
		let flag = Arc::clone(&flag);
		thread::spawn(move || {
			flag.set(true);
		})
	};
	setter.join().unwrap();

	assert!(prefs.commit());
	assert!(flag.get(false));
}
