//! The admin store: catalog, company profile, and the auth gate.

use std::sync::{PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tokio::sync::watch;

use vetx_core::{Company, CompanyPatch, NewProduct, Product, ProductId, ProductPatch};

use crate::mirror::{AUTH_FLAG_VALUE, AuthMirror};
use crate::seed;

/// Errors surfaced by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The given id matched nothing in the live catalog. The catalog is
    /// untouched; callers decide whether the miss matters.
    #[error("no product with id {0}")]
    ProductNotFound(ProductId),
}

/// A point-in-time copy of the store's state.
///
/// Published on the watch channel after every mutation; a subscriber always
/// sees the post-mutation state.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub company: Company,
    pub authenticated: bool,
}

struct State {
    products: Vec<Product>,
    company: Company,
    authenticated: bool,
}

impl State {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            products: self.products.clone(),
            company: self.company.clone(),
            authenticated: self.authenticated,
        }
    }
}

/// The single source of truth for the catalog, company profile, and admin
/// authentication flag.
///
/// Constructed once at process start, seeded with the fixed defaults, and
/// shared by handle with every consumer. All operations are synchronous;
/// mutations take the write lock, publish a fresh [`Snapshot`], and return.
///
/// The store performs no input validation. The form layer is responsible
/// for rejecting empty fields, malformed prices, and malformed emails
/// before calling in.
pub struct Store {
    state: RwLock<State>,
    changes: watch::Sender<Snapshot>,
    mirror: Box<dyn AuthMirror>,
    admin_password: SecretString,
}

impl Store {
    /// Create a store seeded with the default catalog and company profile.
    ///
    /// The in-memory auth flag initializes from the mirror: authenticated
    /// iff the persisted value is exactly `"true"`.
    #[must_use]
    pub fn new(admin_password: SecretString, mirror: Box<dyn AuthMirror>) -> Self {
        let authenticated = mirror.read().as_deref() == Some(AUTH_FLAG_VALUE);
        let state = State {
            products: seed::default_products(),
            company: seed::default_company(),
            authenticated,
        };
        let (changes, _) = watch::channel(state.snapshot());

        Self {
            state: RwLock::new(state),
            changes,
            mirror,
            admin_password,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The current catalog, in insertion order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read(|state| state.products.clone())
    }

    /// The current company profile.
    #[must_use]
    pub fn company(&self) -> Company {
        self.read(|state| state.company.clone())
    }

    /// Whether the admin is currently authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read(|state| state.authenticated)
    }

    /// Subscribe to state changes.
    ///
    /// The receiver is primed with the current snapshot and gets a new one
    /// after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.changes.subscribe()
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Add a product to the catalog.
    ///
    /// Synthesizes a fresh unique id, stamps the creation time, and appends,
    /// preserving insertion order. Returns the created product.
    pub fn add_product(&self, fields: NewProduct) -> Product {
        let product = Product {
            id: ProductId::generate(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            image: fields.image,
            created_at: chrono::Utc::now(),
        };

        self.mutate(|state| {
            state.products.push(product.clone());
        });

        tracing::debug!(id = %product.id, name = %product.name, "product added");
        product
    }

    /// Merge `patch` into the product with the given id.
    ///
    /// Only the fields present in the patch change; `id` and `created_at`
    /// are not reachable through this path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] when the id matches nothing.
    /// The catalog is left untouched in that case.
    pub fn update_product(&self, id: &ProductId, patch: ProductPatch) -> Result<(), StoreError> {
        self.try_mutate(|state| {
            let product = state
                .products
                .iter_mut()
                .find(|p| &p.id == id)
                .ok_or_else(|| StoreError::ProductNotFound(id.clone()))?;
            patch.apply(product);
            Ok(())
        })
    }

    /// Remove the product with the given id from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] when the id matches nothing.
    /// The catalog is left untouched in that case.
    pub fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        self.try_mutate(|state| {
            let before = state.products.len();
            state.products.retain(|p| &p.id != id);
            if state.products.len() == before {
                return Err(StoreError::ProductNotFound(id.clone()));
            }
            Ok(())
        })
    }

    // =========================================================================
    // Company
    // =========================================================================

    /// Merge `patch` into the singleton company record. Always succeeds; the
    /// company always exists.
    pub fn update_company(&self, patch: CompanyPatch) {
        self.mutate(|state| patch.apply(&mut state.company));
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Attempt to log in with the given password.
    ///
    /// On match: the auth flag is set, the mirror written, and `true`
    /// returned. On mismatch: nothing changes and `false` is returned; the
    /// caller surfaces the user-visible message. A mirror write failure is
    /// logged but does not fail the login.
    pub fn login(&self, password: &str) -> bool {
        if password != self.admin_password.expose_secret() {
            tracing::warn!("admin login failed");
            return false;
        }

        self.mutate(|state| state.authenticated = true);
        if let Err(e) = self.mirror.write() {
            tracing::warn!(error = %e, "auth flag not persisted; login valid for this process only");
        }
        tracing::info!("admin logged in");
        true
    }

    /// Log out. Clears the auth flag and the persisted mirror; always
    /// succeeds.
    pub fn logout(&self) {
        self.mutate(|state| state.authenticated = false);
        if let Err(e) = self.mirror.clear() {
            tracing::warn!(error = %e, "auth flag not cleared from mirror");
        }
        tracing::info!("admin logged out");
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn read<T>(&self, f: impl FnOnce(&State) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Run a mutation under the write lock, then publish the post-mutation
    /// snapshot before returning to the caller.
    fn mutate<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let out = f(&mut state);
        let snapshot = state.snapshot();
        drop(state);

        // send_replace delivers even when no receiver is currently held
        self.changes.send_replace(snapshot);
        out
    }

    /// Like [`Self::mutate`], for operations that can fail. A failed
    /// operation leaves the state untouched, so nothing is published and
    /// subscribers see no change.
    fn try_mutate<T>(
        &self,
        f: impl FnOnce(&mut State) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let out = f(&mut state)?;
        let snapshot = state.snapshot();
        drop(state);

        self.changes.send_replace(snapshot);
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use crate::mirror::MemoryAuthMirror;

    use super::*;

    const PASSWORD: &str = "VetXPharma2024";

    fn test_store() -> Store {
        Store::new(
            SecretString::from(PASSWORD),
            Box::new(MemoryAuthMirror::new()),
        )
    }

    fn fields(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: "D".to_string(),
            price: Decimal::new(10, 0),
            category: "X".to_string(),
            image: "u".to_string(),
        }
    }

    #[test]
    fn test_seeded_state() {
        let store = test_store();
        assert_eq!(store.products().len(), 6);
        assert_eq!(store.company().name, "VET_X PHARMA");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_add_product_assigns_unique_ids() {
        let store = test_store();
        let mut ids: Vec<ProductId> = store.products().into_iter().map(|p| p.id).collect();

        for i in 0..50 {
            ids.push(store.add_product(fields(&format!("P{i}"))).id);
        }

        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_add_product_preserves_insertion_order() {
        let store = test_store();
        let created = store.add_product(fields("Newest"));

        let products = store.products();
        assert_eq!(products.len(), 7);
        assert_eq!(products.last().map(|p| p.id.clone()), Some(created.id));
    }

    #[test]
    fn test_update_product_merges_only_given_fields() {
        let store = test_store();
        let before = store.products();
        let target = before.first().unwrap().clone();

        store
            .update_product(
                &target.id,
                ProductPatch {
                    price: Some(Decimal::new(99, 0)),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        let after = store.products();
        let updated = after.first().unwrap();
        assert_eq!(updated.price, Decimal::new(99, 0));
        assert_eq!(updated.name, target.name);
        assert_eq!(updated.description, target.description);
        assert_eq!(updated.category, target.category);
        assert_eq!(updated.image, target.image);
        assert_eq!(updated.created_at, target.created_at);

        // Everyone else untouched
        assert_eq!(&after[1..], &before[1..]);
    }

    #[test]
    fn test_update_unknown_id_leaves_catalog_unchanged() {
        let store = test_store();
        let before = store.products();

        let id = ProductId::new("nonexistent");
        let err = store
            .update_product(
                &id,
                ProductPatch {
                    name: Some("Renamed".to_string()),
                    ..ProductPatch::default()
                },
            )
            .unwrap_err();

        assert_eq!(err, StoreError::ProductNotFound(id));
        assert_eq!(store.products(), before);
    }

    #[test]
    fn test_delete_unknown_id_leaves_catalog_unchanged() {
        let store = test_store();
        let before = store.products();

        let id = ProductId::new("nonexistent");
        let err = store.delete_product(&id).unwrap_err();

        assert_eq!(err, StoreError::ProductNotFound(id));
        assert_eq!(store.products(), before);
    }

    #[test]
    fn test_delete_then_add() {
        let store = test_store();

        store.delete_product(&ProductId::new("3")).unwrap();
        let products = store.products();
        assert_eq!(products.len(), 5);
        assert!(products.iter().all(|p| p.id.as_str() != "3"));

        let created = store.add_product(fields("New"));
        let products = store.products();
        assert_eq!(products.len(), 6);
        let last = products.last().unwrap();
        assert_eq!(last.name, "New");
        assert_eq!(last.id, created.id);
        assert!(
            products
                .iter()
                .filter(|p| p.id == created.id)
                .count()
                == 1
        );
    }

    #[test]
    fn test_update_company() {
        let store = test_store();
        let before = store.company();

        store.update_company(CompanyPatch {
            phone: Some("+91 1111111111".to_string()),
            ..CompanyPatch::default()
        });

        let after = store.company();
        assert_eq!(after.phone, "+91 1111111111");
        assert_eq!(after.name, before.name);
        assert_eq!(after.email, before.email);
    }

    #[test]
    fn test_auth_round_trip() {
        let mirror = Box::new(MemoryAuthMirror::new());
        let store = Store::new(SecretString::from(PASSWORD), mirror);

        assert!(!store.login("wrong-password"));
        assert!(!store.is_authenticated());

        assert!(store.login(PASSWORD));
        assert!(store.is_authenticated());

        store.logout();
        assert!(!store.is_authenticated());

        // Wrong password after logout still leaves state untouched
        assert!(!store.login("wrong-password"));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_and_logout_keep_mirror_consistent() {
        let mirror = std::sync::Arc::new(MemoryAuthMirror::new());
        let store = Store::new(
            SecretString::from(PASSWORD),
            Box::new(std::sync::Arc::clone(&mirror)),
        );

        assert!(store.login(PASSWORD));
        assert_eq!(mirror.read().as_deref(), Some("true"));

        store.logout();
        assert!(mirror.read().is_none());

        // A "restart" against the cleared mirror comes up anonymous
        let restarted = Store::new(SecretString::from(PASSWORD), Box::new(mirror));
        assert!(!restarted.is_authenticated());
    }

    #[test]
    fn test_restores_auth_from_mirror() {
        let mirror = Box::new(MemoryAuthMirror::with_value("true"));
        let store = Store::new(SecretString::from(PASSWORD), mirror);
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_ignores_mirror_values_other_than_true() {
        for value in ["false", "TRUE", "1", ""] {
            let mirror = Box::new(MemoryAuthMirror::with_value(value));
            let store = Store::new(SecretString::from(PASSWORD), mirror);
            assert!(!store.is_authenticated(), "value {value:?} treated as authenticated");
        }
    }

    #[test]
    fn test_failed_mutations_do_not_notify_subscribers() {
        let store = test_store();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        let id = ProductId::new("nonexistent");
        store
            .update_product(
                &id,
                ProductPatch {
                    name: Some("Renamed".to_string()),
                    ..ProductPatch::default()
                },
            )
            .unwrap_err();
        store.delete_product(&id).unwrap_err();
        assert!(!rx.has_changed().unwrap());

        // A real mutation still notifies
        store.delete_product(&ProductId::new("3")).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().products.len(), 5);
    }

    #[test]
    fn test_subscribers_observe_post_mutation_state() {
        let store = test_store();
        let mut rx = store.subscribe();

        // Primed with the seeded snapshot
        assert_eq!(rx.borrow().products.len(), 6);

        let created = store.add_product(fields("Observed"));
        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update();
        assert_eq!(snapshot.products.len(), 7);
        assert_eq!(snapshot.products.last().map(|p| p.id.clone()), Some(created.id));
        drop(snapshot);

        store.logout();
        assert!(!rx.borrow_and_update().authenticated);
    }
}
