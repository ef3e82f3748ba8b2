// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Current-account holder wired to an [`AccountStore`].
//!
//! Restores the account at startup, persists it on sign-in and user updates,
//! and clears it on sign-out. The account itself never touches storage.

use crate::error::SessionError;
use crate::models::{Account, User};
use crate::store::AccountStore;

/// The process's current account plus the store it is persisted in.
pub struct AccountSession<S> {
    store: S,
    current: Option<Account>,
}

impl<S: AccountStore> AccountSession<S> {
    /// Load the current account from `store`, if one was saved.
    pub fn restore(store: S) -> Result<Self, SessionError> {
        let current = store.load_account()?;
        tracing::info!(
            restored = current.is_some(),
            authenticated = current.as_ref().is_some_and(Account::is_authenticated),
            "Account session restored"
        );
        Ok(Self { store, current })
    }

    pub fn current(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.as_ref().is_some_and(Account::is_authenticated)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Make `account` current and persist it.
    pub fn sign_in(
        &mut self,
        account: Account,
        identifier: Option<&str>,
    ) -> Result<(), SessionError> {
        self.store.save_account(&account, identifier)?;
        self.current = Some(account);
        Ok(())
    }

    /// Replace the user on the current account and persist the change.
    pub fn update_user(&mut self, user: Option<User>) -> Result<&Account, SessionError> {
        let current = self.current.as_ref().ok_or(SessionError::NoAccount)?;
        let updated = current.clone().with_user(user)?;

        self.store.update_account(&updated)?;
        Ok(&*self.current.insert(updated))
    }

    /// Clear the stored account. Returns the account that was current.
    pub fn sign_out(&mut self) -> Result<Option<Account>, SessionError> {
        let unauthenticated = Account::unauthenticated();
        let account = self.current.as_ref().unwrap_or(&unauthenticated);
        self.store.delete_account(account)?;

        tracing::info!("Signed out");
        Ok(self.current.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryAccountStore;

    #[test]
    fn test_update_user_without_account() {
        let mut session = AccountSession::restore(MemoryAccountStore::new()).unwrap();
        let err = session.update_user(Some(User::new("/users/1"))).unwrap_err();
        assert!(matches!(err, SessionError::NoAccount));
    }

    #[test]
    fn test_update_user_keeps_identifier() {
        let mut session = AccountSession::restore(MemoryAccountStore::new()).unwrap();
        let account = Account::with_credentials("tok", "bearer", "public", None).unwrap();
        session.sign_in(account, Some("ada@example.com")).unwrap();

        let updated = session.update_user(Some(User::new("/users/9"))).unwrap();
        assert_eq!(updated.user().unwrap().id(), Some("9"));

        let store = session.store();
        assert_eq!(
            store.stored_identifier().unwrap().as_deref(),
            Some("ada@example.com")
        );
        let loaded = store.load_account().unwrap().unwrap();
        assert_eq!(loaded.user().unwrap().uri, "/users/9");
    }

    #[test]
    fn test_sign_out_clears_current() {
        let mut session = AccountSession::restore(MemoryAccountStore::new()).unwrap();
        session.sign_in(Account::new("tok").unwrap(), None).unwrap();
        assert!(session.is_authenticated());

        let previous = session.sign_out().unwrap();
        assert_eq!(previous.unwrap().access_token(), Some("tok"));
        assert!(session.current().is_none());
        assert!(session.store().is_empty().unwrap());
    }
}
