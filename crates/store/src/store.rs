use dataset::{ClusterModel, Dataset, MigrationIndex};
use foundation::{DemographicFilter, SampleYear};

use crate::selection::Selection;

/// Structured change record for diagnostics.
///
/// For now this is just structured text; `seq` orders events across the
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub seq: u64,
    pub kind: &'static str,
    pub message: String,
}

/// Everything a presentation component needs to re-render: the selection
/// snapshot plus borrowed references to the static data.
pub struct StoreUpdate<'a> {
    pub selection: &'a Selection,
    pub dataset: &'a Dataset,
    pub migration: &'a MigrationIndex,
    pub clusters: Option<&'a ClusterModel>,
}

/// A presentation component registered with the store.
///
/// Listeners are invoked synchronously, in registration order, after every
/// effective mutation. There is no debouncing and no async boundary; the
/// dataset is small and pre-loaded, so eager redraw is cheap.
pub trait ChangeListener {
    fn selection_changed(&mut self, update: &StoreUpdate<'_>);
}

/// Convenience for single-threaded UIs where a component is shared between
/// the store (as a listener) and the composition root (for direct calls
/// like resize): a shared cell of a listener is itself a listener.
impl<T: ChangeListener> ChangeListener for std::rc::Rc<std::cell::RefCell<T>> {
    fn selection_changed(&mut self, update: &StoreUpdate<'_>) {
        self.borrow_mut().selection_changed(update);
    }
}

/// Owns the static data and the mutable selection, and fans out changes to
/// the registered presentation components.
pub struct DashboardStore {
    dataset: Dataset,
    migration: MigrationIndex,
    clusters: Option<ClusterModel>,
    selection: Selection,
    listeners: Vec<Box<dyn ChangeListener>>,
    events: Vec<ChangeEvent>,
    next_seq: u64,
}

impl DashboardStore {
    /// Cluster data may still be in flight (or unavailable for the whole
    /// session); it attaches later via [`DashboardStore::attach_clusters`].
    pub fn new(dataset: Dataset) -> Self {
        let migration = MigrationIndex::build(&dataset);
        Self {
            dataset,
            migration,
            clusters: None,
            selection: Selection::default(),
            listeners: Vec::new(),
            events: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn register(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    /// Pushes the current state to every listener without mutating
    /// anything. The composition root calls this once after wiring so
    /// components paint their initial state.
    pub fn refresh(&mut self) {
        self.notify();
    }

    /// Resolves `name` against the dataset and applies the assignment
    /// rule. Unknown names are a silent no-op (logged, never an error).
    pub fn select_country(&mut self, name: &str) {
        if !self.dataset.contains(name) {
            self.emit("select.miss", format!("unknown country: {name}"));
            return;
        }
        if self.selection.assign(name) {
            self.emit("select", format!("selected {name}"));
            self.notify();
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selection.clear_slots() {
            self.emit("select.clear", "selection cleared".to_string());
            self.notify();
        }
    }

    pub fn set_year(&mut self, year: SampleYear) {
        if self.selection.year != year {
            self.selection.year = year;
            self.emit("year", format!("year set to {year}"));
            self.notify();
        }
    }

    pub fn set_filter(&mut self, filter: DemographicFilter) {
        if self.selection.filter != filter {
            self.selection.filter = filter;
            self.emit("filter", format!("filter set to {}", filter.as_str()));
            self.notify();
        }
    }

    /// Attaches cluster data once its (possibly fallback) fetch resolves,
    /// and re-notifies so clustering views leave their unavailable state.
    pub fn attach_clusters(&mut self, clusters: ClusterModel) {
        self.emit(
            "clusters",
            format!("cluster data attached ({} clusters)", clusters.clusters.len()),
        );
        self.clusters = Some(clusters);
        self.notify();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn migration(&self) -> &MigrationIndex {
        &self.migration
    }

    pub fn clusters(&self) -> Option<&ClusterModel> {
        self.clusters.as_ref()
    }

    pub fn update(&self) -> StoreUpdate<'_> {
        StoreUpdate {
            selection: &self.selection,
            dataset: &self.dataset,
            migration: &self.migration,
            clusters: self.clusters.as_ref(),
        }
    }

    pub fn events(&self) -> &[ChangeEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, kind: &'static str, message: String) {
        self.events.push(ChangeEvent {
            seq: self.next_seq,
            kind,
            message,
        });
        self.next_seq += 1;
    }

    fn notify(&mut self) {
        let Self {
            dataset,
            migration,
            clusters,
            selection,
            listeners,
            ..
        } = self;
        let update = StoreUpdate {
            selection,
            dataset,
            migration,
            clusters: clusters.as_ref(),
        };
        for listener in listeners.iter_mut() {
            listener.selection_changed(&update);
        }
    }
}
