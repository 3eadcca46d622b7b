//! Application context: configuration, the merged user database and
//! the session, owned explicitly and passed to every operation. This
//! replaces the original's module-level singleton.

use crate::config::Config;
use crate::core::{auth, calculator, generator};
use crate::errors::{AppError, AppResult};
use crate::models::{KitCalculation, PhoneGeneration, UserDatabase, UserRecord};
use crate::store::session::Session;
use crate::store::{baseline, merge, overlay};
use rand::Rng;
use rand::thread_rng;
use std::path::Path;

/// Which history a clear operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    Kit,
    Phone,
    All,
}

/// One line of the recent-activity feed shown on the status screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub timestamp: String,
}

pub struct App {
    pub config: Config,
    pub users: UserDatabase,
    pub session: Session,
}

impl App {
    /// Assemble the in-memory database from baseline + overlay and
    /// pick up the session. Source problems degrade to empty state,
    /// so a fresh registration flow always works.
    pub fn load(config: &Config) -> App {
        let base = baseline::load(Path::new(&config.baseline));
        let over = overlay::load(Path::new(&config.overlay));
        let users = merge::merge(base, over);
        let session = Session::load(Path::new(&config.session));

        App {
            config: config.clone(),
            users,
            session,
        }
    }

    /// Write the whole database snapshot to the overlay. Called after
    /// every mutation.
    pub fn persist_users(&self) -> AppResult<()> {
        overlay::save(Path::new(&self.config.overlay), &self.users)
    }

    pub fn persist_session(&self) -> AppResult<()> {
        self.session.save(Path::new(&self.config.session))
    }

    // ---------------------------
    // Accounts
    // ---------------------------

    /// Username of the logged-in user, or `NotLoggedIn`. A stale
    /// session pointing at a user that no longer exists (after a
    /// reset) counts as logged out.
    pub fn current_user(&self) -> AppResult<&str> {
        self.session
            .current_user
            .as_deref()
            .filter(|u| self.users.contains_key(*u))
            .ok_or(AppError::NotLoggedIn)
    }

    pub fn current_record(&self) -> AppResult<&UserRecord> {
        let username = self.current_user()?;
        Ok(&self.users[username])
    }

    /// Create an account and log it in, as the original registration
    /// flow does. Validation failures mutate nothing.
    pub fn register(&mut self, username: &str, password: &str, confirm: &str) -> AppResult<()> {
        if username.is_empty() {
            return Err(AppError::EmptyField("username"));
        }
        if password.is_empty() || confirm.is_empty() {
            return Err(AppError::EmptyField("password"));
        }
        if password != confirm {
            return Err(AppError::PasswordMismatch);
        }
        if password.len() < auth::MIN_PASSWORD_LEN {
            return Err(AppError::PasswordTooShort(auth::MIN_PASSWORD_LEN));
        }
        if !auth::valid_username(username) {
            return Err(AppError::InvalidUsername(username.to_string()));
        }
        if self.users.contains_key(username) {
            return Err(AppError::UsernameTaken(username.to_string()));
        }

        self.users.insert(
            username.to_string(),
            UserRecord::new(auth::hash_password(password)),
        );
        self.persist_users()?;

        self.session.current_user = Some(username.to_string());
        self.persist_session()?;
        Ok(())
    }

    /// Check credentials and persist the logged-in user. Unknown
    /// username and wrong password are indistinguishable.
    pub fn login(&mut self, username: &str, password: &str) -> AppResult<()> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::EmptyField("username or password"));
        }

        let hash = auth::hash_password(password);
        let matches = self
            .users
            .get(username)
            .is_some_and(|record| record.password_hash == hash);
        if !matches {
            return Err(AppError::InvalidCredentials);
        }

        self.session.current_user = Some(username.to_string());
        self.persist_session()?;
        Ok(())
    }

    /// End the session. Also drops the generated-number set so
    /// duplicate tracking cannot leak to the next identity.
    pub fn logout(&mut self) -> AppResult<()> {
        self.session = Session::default();
        Session::clear(Path::new(&self.config.session))
    }

    // ---------------------------
    // History mutations
    // ---------------------------

    /// Compute a kit calculation and append it to the acting user's
    /// history.
    pub fn calculate(&mut self, kit_number: i64) -> AppResult<KitCalculation> {
        let username = self.current_user()?.to_string();
        let calculation = calculator::compute(kit_number)?;

        let record = self
            .users
            .get_mut(&username)
            .ok_or(AppError::NotLoggedIn)?;
        record.history.kit_calculations.push(calculation.clone());
        self.persist_users()?;

        Ok(calculation)
    }

    /// Generate a phone number with the process-default RNG.
    pub fn generate_phone(&mut self, allow_duplicates: bool) -> AppResult<PhoneGeneration> {
        self.generate_phone_with(&mut thread_rng(), allow_duplicates)
    }

    /// Generate a phone number with a caller-supplied RNG (tests seed
    /// a deterministic one) and append it to the acting user's
    /// history.
    pub fn generate_phone_with<R: Rng>(
        &mut self,
        rng: &mut R,
        allow_duplicates: bool,
    ) -> AppResult<PhoneGeneration> {
        let username = self.current_user()?.to_string();
        let generation = generator::generate(rng, &self.session.generated_numbers, allow_duplicates)?;

        self.session
            .generated_numbers
            .insert(generation.number.clone());

        let record = self
            .users
            .get_mut(&username)
            .ok_or(AppError::NotLoggedIn)?;
        record.history.phone_generations.push(generation.clone());

        self.persist_users()?;
        self.persist_session()?;

        Ok(generation)
    }

    /// Clear one or both histories of the acting user. Clearing
    /// everything also forgets the generated-number set.
    pub fn clear_history(&mut self, scope: ClearScope) -> AppResult<()> {
        let username = self.current_user()?.to_string();
        let record = self
            .users
            .get_mut(&username)
            .ok_or(AppError::NotLoggedIn)?;

        match scope {
            ClearScope::Kit => record.history.kit_calculations.clear(),
            ClearScope::Phone => record.history.phone_generations.clear(),
            ClearScope::All => {
                record.history.kit_calculations.clear();
                record.history.phone_generations.clear();
                self.session.generated_numbers.clear();
            }
        }

        self.persist_users()?;
        if scope == ClearScope::All {
            self.persist_session()?;
        }
        Ok(())
    }

    /// Drop all locally persisted demo state (overlay + session). The
    /// baseline file is left in place.
    pub fn reset(&self) -> AppResult<()> {
        overlay::clear(Path::new(&self.config.overlay))?;
        Session::clear(Path::new(&self.config.session))
    }

    // ---------------------------
    // Dashboard
    // ---------------------------

    /// The newest `limit` activities of the acting user across both
    /// history kinds, newest first.
    pub fn recent_activity(&self, limit: usize) -> AppResult<Vec<Activity>> {
        let record = self.current_record()?;
        let history = &record.history;

        let mut activities: Vec<Activity> = history
            .kit_calculations
            .iter()
            .map(|calc| Activity {
                description: format!(
                    "Kit calculation: {} -> {}",
                    calc.kit_number, calc.padded_result
                ),
                timestamp: calc.timestamp.clone(),
            })
            .chain(history.phone_generations.iter().map(|generation| Activity {
                description: format!("Generated phone: {}", generation.number),
                timestamp: generation.timestamp.clone(),
            }))
            .collect();

        // timestamps sort lexicographically in chronological order
        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        activities.truncate(limit);
        Ok(activities)
    }
}
