use std::io;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

use collbench::container::{
    ArrayDeque, ArrayList, FnvHashMap, FnvHashSet, HashMap, HashSet,
    LinkedHashMap, LinkedHashSet, LinkedList, PriorityQueue, TreeMap, TreeSet,
};
use collbench::loader::load;
use collbench::operation::{clear, contains, insert, remove};
use collbench::{
    Averages, Container, Error, Family, Kind, Reporter, Runner, Workload,
};

/// Records every report it receives.
#[derive(Default)]
struct Recorder {
    reports: Vec<(String, Averages)>,
}

impl Reporter for Recorder {
    fn report(&mut self, name: &str, averages: &Averages) -> io::Result<()> {
        self.reports.push((name.to_string(), *averages));
        Ok(())
    }
}

/// Refuses the first report, then behaves like a `Recorder`.
#[derive(Default)]
struct FailFirst {
    failed: bool,
    inner: Recorder,
}

impl Reporter for FailFirst {
    fn report(&mut self, name: &str, averages: &Averages) -> io::Result<()> {
        if !self.failed {
            self.failed = true;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        self.inner.report(name, averages)
    }
}

/// Counts calls made through the capability set.
#[derive(Default)]
struct Counting<C> {
    inner: C,
    inserts: usize,
    removes: usize,
    clears: usize,
}

impl<C: Container> Container for Counting<C> {
    const FAMILY: Family = C::FAMILY;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn insert(&mut self, key: u32, value: u32) -> bool {
        self.inserts += 1;
        self.inner.insert(key, value)
    }

    fn remove(&mut self, key: u32) -> bool {
        self.removes += 1;
        self.inner.remove(key)
    }

    fn contains(&self, key: u32) -> bool {
        self.inner.contains(key)
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.inner.clear()
    }

    fn entries(&self) -> Vec<(u32, u32)> {
        self.inner.entries()
    }
}

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

fn loaded<C: Container>(workload: &Workload, rng: &mut SmallRng) -> C {
    let mut container = C::default();
    load(&mut container, workload, rng);
    container
}

fn insert_keeps_size<C: Container>(workload: &Workload, seed: u64) {
    let mut rng = rng(seed);
    let mut container: C = loaded(workload, &mut rng);
    let before = container.len();
    let total = insert(&mut container, workload, &mut rng).unwrap();
    assert!(total >= 0);
    assert_eq!(container.len(), before);
}

fn remove_keeps_size<C: Container>(workload: &Workload, seed: u64) {
    let mut rng = rng(seed);
    let mut container: C = loaded(workload, &mut rng);
    let before = container.len();
    remove(&mut container, workload, &mut rng).unwrap();

    match C::FAMILY {
        Family::Sequence | Family::Map => assert_eq!(container.len(), before),
        // A re-inserted draw the set already holds is absorbed
        Family::Set => assert!(container.len() <= before),
    }
}

fn contains_is_read_only<C: Container>(workload: &Workload, seed: u64) {
    let mut rng = rng(seed);
    let container: C = loaded(workload, &mut rng);
    let before = container.entries();
    contains(&container, workload, &mut rng).unwrap();
    assert_eq!(container.entries(), before);
}

fn clear_reloads<C: Container>(workload: &Workload, seed: u64) {
    let mut rng = rng(seed);
    let mut container: C = loaded(workload, &mut rng);
    clear(&mut container, workload, &mut rng).unwrap();

    let n = workload.element_count();
    match C::FAMILY {
        Family::Sequence | Family::Map => assert_eq!(container.len(), n),
        Family::Set if n == 0 => assert!(container.is_empty()),
        Family::Set => {
            assert!(container.len() >= 1);
            assert!(container.len() <= n);
        }
    }
}

macro_rules! for_each_container {
    ($check:ident, $workload:expr, $seed:expr) => {{
        $check::<HashSet>($workload, $seed);
        $check::<TreeSet>($workload, $seed);
        $check::<LinkedHashSet>($workload, $seed);
        $check::<FnvHashSet>($workload, $seed);
        $check::<ArrayList>($workload, $seed);
        $check::<LinkedList>($workload, $seed);
        $check::<ArrayDeque>($workload, $seed);
        $check::<PriorityQueue>($workload, $seed);
        $check::<HashMap>($workload, $seed);
        $check::<TreeMap>($workload, $seed);
        $check::<LinkedHashMap>($workload, $seed);
        $check::<FnvHashMap>($workload, $seed);
    }};
}

fn workload() -> impl Strategy<Value = Workload> {
    (0usize..200, 1usize..20, 0u32..400).prop_map(|(n, trials, max)| {
        Workload::new(n, trials, max).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn insert_benchmark_restores_size(
        w in workload(),
        seed in any::<u64>()
    ) {
        for_each_container!(insert_keeps_size, &w, seed);
    }

    #[test]
    fn remove_benchmark_keeps_size(
        w in workload(),
        seed in any::<u64>()
    ) {
        for_each_container!(remove_keeps_size, &w, seed);
    }

    #[test]
    fn contains_benchmark_never_mutates(
        w in workload(),
        seed in any::<u64>()
    ) {
        for_each_container!(contains_is_read_only, &w, seed);
    }

    #[test]
    fn clear_benchmark_reloads_to_size(
        w in workload(),
        seed in any::<u64>()
    ) {
        for_each_container!(clear_reloads, &w, seed);
    }
}

#[test]
fn empty_workload_runs_every_kind() {
    let workload = Workload::new(0, 5, 9).unwrap();
    let mut runner = Runner::with_source(workload, rng(5));
    for &kind in Kind::ALL.iter() {
        let result = runner.run(kind).unwrap();
        assert_eq!(result.kind(), kind);
        assert_eq!(result.trial_count(), 5);

        let averages = result.averages();
        for avg in [
            averages.insert,
            averages.contains,
            averages.remove,
            averages.clear,
        ]
        .iter()
        {
            assert!(avg.is_finite());
            assert!(*avg >= 0.0);
        }
    }
}

#[test]
fn empty_map_makes_no_load_insertions() {
    let workload = Workload::new(0, 7, 99).unwrap();
    let mut runner = Runner::with_source(workload, rng(5));

    let mut map = Counting::<TreeMap>::default();
    runner.measure(Kind::TreeMap, &mut map).unwrap();

    // Only the insert benchmark's probes went in; each was undone, and
    // every clear reload was empty.
    assert_eq!(map.inserts, 7);
    assert_eq!(map.removes, 7 + 7);
    assert_eq!(map.clears, 7);
    assert!(map.is_empty());
}

#[test]
fn every_trial_runs_once() {
    let workload = Workload::new(50, 9, 49).unwrap();
    let mut runner = Runner::with_source(workload, rng(5));

    let mut list = Counting::<ArrayList>::default();
    runner.measure(Kind::ArrayList, &mut list).unwrap();

    assert_eq!(list.removes, 9 + 9);
    assert_eq!(list.clears, 9);
    // Load, 9 probes, a re-insert per successful removal, 9 reloads
    assert!(list.inserts >= 50 + 9 + 9 * 50);
    assert!(list.inserts <= 50 + 9 + 9 + 9 * 50);
    assert_eq!(list.len(), 50);
}

#[test]
fn remove_on_maps_keeps_size() {
    let workload = Workload::new(100, 30, 150).unwrap();
    let mut rng = rng(11);

    let mut map: HashMap = loaded(&workload, &mut rng);
    remove(&mut map, &workload, &mut rng).unwrap();
    assert_eq!(map.len(), 100);
}

#[test]
fn hash_set_scenario() {
    let workload = Workload::new(1000, 10, 999).unwrap();
    let mut runner = Runner::with_source(workload, rng(5));

    let mut set = HashSet::default();
    let result = runner.measure(Kind::HashSet, &mut set).unwrap();
    assert!(set.len() <= 1000);

    let mut recorder = Recorder::default();
    let failures = runner.run_all(&[Kind::HashSet], &mut recorder);
    assert!(failures.is_empty());
    assert_eq!(recorder.reports.len(), 1);

    let (name, averages) = &recorder.reports[0];
    assert_eq!(name, "HashSet");
    for avg in [
        averages.insert,
        averages.contains,
        averages.remove,
        averages.clear,
    ]
    .iter()
    {
        assert!(avg.is_finite());
        assert!(*avg >= 0.0);
    }
    assert_eq!(result.name(), "HashSet");
}

#[test]
fn kinds_of_one_family_report_independently() {
    let workload = Workload::new(200, 10, 199).unwrap();
    let mut runner = Runner::with_source(workload, rng(5));

    let mut recorder = Recorder::default();
    let kinds = [Kind::HashSet, Kind::TreeSet];
    let failures = runner.run_all(&kinds, &mut recorder);
    assert!(failures.is_empty());

    let names = recorder
        .reports
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["HashSet", "TreeSet"]);

    let tree = runner.run(Kind::TreeSet).unwrap();
    let hash = runner.run(Kind::HashSet).unwrap();
    assert_ne!(tree.kind(), hash.kind());
    assert_eq!(tree.trial_count(), hash.trial_count());
}

#[test]
fn failed_kind_does_not_stop_the_suite() {
    let workload = Workload::new(20, 3, 19).unwrap();
    let mut runner = Runner::with_source(workload, rng(5));

    let mut reporter = FailFirst::default();
    let kinds = [Kind::ArrayDeque, Kind::LinkedHashMap];
    let failures = runner.run_all(&kinds, &mut reporter);

    assert_eq!(failures.len(), 1);
    assert!(matches!(failures[0], Error::Report(_)));
    assert_eq!(reporter.inner.reports.len(), 1);
    assert_eq!(reporter.inner.reports[0].0, "LinkedHashMap");
}

#[test]
fn zero_trials_is_rejected() {
    assert!(matches!(
        Workload::new(10, 0, 9),
        Err(Error::InvalidWorkload(_))
    ));
}
