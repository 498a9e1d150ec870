//! Resource-addressed access to the pets store.
//!
//! [`PetProvider`] is the public operation surface. Every call classifies
//! its resource first, validates write input before touching the store, runs
//! the store operation behind a single lock, and publishes a change event
//! once the lock is released.

use parking_lot::Mutex;

use crate::database::{Database, DatabaseConfig, Filter, SortOrder};
use crate::error::{Error, Result};
use crate::notify::{ChangeEvent, ChangeKind, ChangeNotifier, Subscription};
use crate::pet::{Pet, PetValues};
use crate::resource::Resource;
use crate::validation::{validate_insert, validate_update};

/// A finite snapshot of query results.
///
/// The cursor can be iterated any number of times.
///
/// # Examples
///
/// ```
/// use shelter::{PetProvider, PetValues};
/// use shelter::database::Filter;
///
/// let provider = PetProvider::in_memory().unwrap();
/// provider.insert("pets", PetValues::new().name("Toto")).unwrap();
///
/// let cursor = provider.query("pets", &Filter::all(), None).unwrap();
/// assert_eq!(cursor.len(), 1);
/// assert_eq!(cursor.iter().count(), cursor.iter().count());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetCursor {
    rows: Vec<Pet>,
}

impl PetCursor {
    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows from the start.
    pub fn iter(&self) -> std::slice::Iter<'_, Pet> {
        self.rows.iter()
    }

    /// Returns the first row.
    #[must_use]
    pub fn first(&self) -> Option<&Pet> {
        self.rows.first()
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Pet] {
        &self.rows
    }

    /// Consumes the cursor, returning its rows.
    #[must_use]
    pub fn into_vec(self) -> Vec<Pet> {
        self.rows
    }
}

impl IntoIterator for PetCursor {
    type Item = Pet;
    type IntoIter = std::vec::IntoIter<Pet>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a PetCursor {
    type Item = &'a Pet;
    type IntoIter = std::slice::Iter<'a, Pet>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Resource-addressed CRUD over the pets store, with change notification.
///
/// All store operations are serialized through one lock; the provider can be
/// shared between threads behind an `Arc`.
///
/// # Examples
///
/// ```
/// use shelter::{Gender, PetProvider, PetValues, Resource};
///
/// let provider = PetProvider::in_memory().unwrap();
/// let toto = PetValues::new().name("Toto").breed("Terrier").gender(Gender::Male).weight(7);
///
/// let resource = provider.insert("pets", toto).unwrap();
/// assert_eq!(resource, Resource::Item(1));
///
/// let pet = provider.get("pets/1").unwrap().unwrap();
/// assert_eq!(pet.weight, 7);
/// ```
#[derive(Debug)]
pub struct PetProvider {
    db: Mutex<Database>,
    notifier: ChangeNotifier,
}

impl PetProvider {
    /// Wraps an open database.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self {
            db: Mutex::new(db),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Opens the database described by `config` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        Database::open(config).map(Self::new)
    }

    /// Creates a provider over a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be initialized.
    pub fn in_memory() -> Result<Self> {
        Database::open_in_memory().map(Self::new)
    }

    /// Lists pets under `resource` matching `filter`.
    ///
    /// On an item resource the result holds at most that pet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedResource`] for an unrecognized resource, or
    /// a store error.
    pub fn query(
        &self,
        resource: impl AsRef<str>,
        filter: &Filter,
        sort: Option<SortOrder>,
    ) -> Result<PetCursor> {
        let resource = Resource::parse(resource.as_ref())?;
        let filter = scoped_filter(resource, filter);

        let db = self.db.lock();
        let rows = Database::query_pets(db.connection(), &filter, sort.as_ref())?;
        Ok(PetCursor { rows })
    }

    /// Retrieves the pet at an item resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedResource`] if `resource` is not an item, or
    /// a store error.
    pub fn get(&self, resource: impl AsRef<str>) -> Result<Option<Pet>> {
        let input = resource.as_ref();
        let Resource::Item(id) = Resource::parse(input)? else {
            return Err(Error::unsupported_resource(input, "get requires an item resource"));
        };

        let db = self.db.lock();
        Database::get_pet(db.connection(), id)
    }

    /// Inserts a pet into the collection and returns its item resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedResource`] unless `resource` is the
    /// collection, [`Error::InvalidArgument`] if `values` fail validation, or
    /// a store error.
    pub fn insert(&self, resource: impl AsRef<str>, values: PetValues) -> Result<Resource> {
        let input = resource.as_ref();
        let resource = Resource::parse(input)?;
        if !resource.is_collection() {
            return Err(Error::unsupported_resource(input, "insertion requires the collection"));
        }
        validate_insert(&values)?;

        let id = self.db.lock().insert_pet(&values)?;

        self.notify(resource, ChangeKind::Insert, 1);
        Ok(Resource::Item(id))
    }

    /// Overwrites the supplied fields of the pets under `resource` matching
    /// `filter`, returning the number of rows affected.
    ///
    /// An empty field set is a successful no-op returning 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedResource`] for an unrecognized resource,
    /// [`Error::InvalidArgument`] if a supplied field is invalid, or a store
    /// error.
    pub fn update(
        &self,
        resource: impl AsRef<str>,
        values: PetValues,
        filter: &Filter,
    ) -> Result<usize> {
        let resource = Resource::parse(resource.as_ref())?;
        validate_update(&values)?;
        if values.is_empty() {
            return Ok(0);
        }
        let filter = scoped_filter(resource, filter);

        let rows = self.db.lock().update_pets(&filter, &values)?;

        self.notify(resource, ChangeKind::Update, rows);
        Ok(rows)
    }

    /// Deletes the pets under `resource` matching `filter`, returning the
    /// number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedResource`] for an unrecognized resource, or
    /// a store error.
    pub fn delete(&self, resource: impl AsRef<str>, filter: &Filter) -> Result<usize> {
        let resource = Resource::parse(resource.as_ref())?;
        let filter = scoped_filter(resource, filter);

        let rows = self.db.lock().delete_pets(&filter)?;

        self.notify(resource, ChangeKind::Delete, rows);
        Ok(rows)
    }

    /// Registers an observer for changes to `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedResource`] for an unrecognized resource.
    pub fn subscribe(&self, resource: impl AsRef<str>) -> Result<Subscription> {
        let resource = Resource::parse(resource.as_ref())?;
        Ok(self.notifier.subscribe(resource))
    }

    /// Returns the change notifier.
    #[must_use]
    pub const fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Consumes the provider, returning the database handle.
    #[must_use]
    pub fn into_inner(self) -> Database {
        self.db.into_inner()
    }

    fn notify(&self, resource: Resource, kind: ChangeKind, rows: usize) {
        let reached = self.notifier.publish(&ChangeEvent {
            resource,
            kind,
            rows,
        });
        if rows > 0 {
            log::debug!("{kind:?} on {resource} ({rows} row(s)) notified {reached} observer(s)");
        }
    }
}

/// Narrows `filter` to the rows addressed by `resource`.
fn scoped_filter(resource: Resource, filter: &Filter) -> Filter {
    match resource {
        Resource::Collection => filter.clone(),
        Resource::Item(id) => Filter::by_id(id).merge(filter),
    }
}
