//! In-memory repository fakes and fixtures for service tests
//!
//! The fakes mirror the PostgreSQL repositories closely enough for the
//! validator to be exercised without a database: counts are live reads
//! over the shared store, and `create` enforces the one-Confirmed-per-
//! (user, activity) rule the way the partial unique index does.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use care_core::{
    Activity, ActivityRepository, Booking, BookingRepository, Clock, DomainError, MedicalFlags,
    MembershipTier, RepoResult, Snowflake, SnowflakeGenerator, User, UserRepository, UserRole,
    WeekWindow,
};

use crate::services::{ServiceContext, ServiceContextBuilder};

/// A Monday at 12:00 UTC; the pinned "now" for every service test
pub fn monday_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 3, 12, 0, 0).unwrap()
}

/// Clock pinned to a fixed instant
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
struct Store {
    users: Mutex<Vec<User>>,
    activities: Mutex<Vec<Activity>>,
    bookings: Mutex<Vec<Booking>>,
}

struct MemoryUserRepo(Arc<Store>);

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.0.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        Ok(self.0.users.lock().unwrap().clone())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut users = self.0.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::ValidationError("email already in use".to_string()));
        }
        users.push(user.clone());
        Ok(())
    }
}

struct MemoryActivityRepo(Arc<Store>);

#[async_trait]
impl ActivityRepository for MemoryActivityRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Activity>> {
        Ok(self
            .0
            .activities
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Activity>> {
        let mut activities = self.0.activities.lock().unwrap().clone();
        activities.sort_by_key(|a| (a.start_time, a.id));
        Ok(activities)
    }

    async fn create(&self, activity: &Activity) -> RepoResult<()> {
        self.0.activities.lock().unwrap().push(activity.clone());
        Ok(())
    }
}

struct MemoryBookingRepo(Arc<Store>);

impl MemoryBookingRepo {
    fn owner_role(&self, user_id: Snowflake) -> Option<UserRole> {
        self.0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.role)
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Booking>> {
        Ok(self
            .0
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn find_confirmed(
        &self,
        user_id: Snowflake,
        activity_id: Snowflake,
    ) -> RepoResult<Option<Booking>> {
        Ok(self
            .0
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.user_id == user_id && b.activity_id == activity_id && b.is_confirmed())
            .cloned())
    }

    async fn create(&self, booking: &Booking) -> RepoResult<()> {
        let mut bookings = self.0.bookings.lock().unwrap();
        let duplicate = booking.is_confirmed()
            && bookings.iter().any(|b| {
                b.user_id == booking.user_id
                    && b.activity_id == booking.activity_id
                    && b.is_confirmed()
            });
        if duplicate {
            return Err(DomainError::DuplicateBooking);
        }
        bookings.push(booking.clone());
        Ok(())
    }

    async fn update(&self, booking: &Booking) -> RepoResult<()> {
        let mut bookings = self.0.bookings.lock().unwrap();
        match bookings.iter_mut().find(|b| b.id == booking.id) {
            Some(existing) => {
                *existing = booking.clone();
                Ok(())
            }
            None => Err(DomainError::BookingNotFound),
        }
    }

    async fn count_confirmed_volunteers(&self, activity_id: Snowflake) -> RepoResult<i64> {
        let bookings = self.0.bookings.lock().unwrap().clone();
        Ok(bookings
            .iter()
            .filter(|b| b.activity_id == activity_id && b.is_confirmed())
            .filter(|b| self.owner_role(b.user_id) == Some(UserRole::Volunteer))
            .count() as i64)
    }

    async fn count_confirmed_attendees(&self, activity_id: Snowflake) -> RepoResult<i64> {
        let bookings = self.0.bookings.lock().unwrap().clone();
        Ok(bookings
            .iter()
            .filter(|b| b.activity_id == activity_id && b.is_confirmed())
            .filter(|b| {
                self.owner_role(b.user_id)
                    .is_some_and(|role| role != UserRole::Volunteer)
            })
            .count() as i64)
    }

    async fn count_confirmed_in_window(
        &self,
        user_id: Snowflake,
        window: WeekWindow,
    ) -> RepoResult<i64> {
        Ok(self
            .0
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id && b.is_confirmed() && window.contains(b.created_at))
            .count() as i64)
    }

    async fn confirmed_with_users(
        &self,
        activity_id: Snowflake,
    ) -> RepoResult<Vec<(Booking, User)>> {
        let bookings = self.0.bookings.lock().unwrap().clone();
        let users = self.0.users.lock().unwrap().clone();

        let mut roster: Vec<(Booking, User)> = bookings
            .into_iter()
            .filter(|b| b.activity_id == activity_id && b.is_confirmed())
            .filter_map(|b| {
                users
                    .iter()
                    .find(|u| u.id == b.user_id)
                    .cloned()
                    .map(|u| (b, u))
            })
            .collect();
        roster.sort_by_key(|(b, _)| (b.created_at, b.id));
        Ok(roster)
    }
}

/// Ids of the seeded users and activities
pub struct SeedIds {
    pub alice: Snowflake,
    pub bob: Snowflake,
    pub carol: Snowflake,
    pub david: Snowflake,
    pub emma: Snowflake,
    pub frank_volunteer: Snowflake,
    pub yoga: Snowflake,
    pub art: Snowflake,
    pub dance: Snowflake,
    pub music: Snowflake,
}

/// Build a context over in-memory fakes with the clock pinned to
/// `monday_noon()`, seeded with the standard cast and activities.
pub async fn fixed_context() -> (ServiceContext, SeedIds) {
    let store = Arc::new(Store::default());

    let ctx = ServiceContextBuilder::new()
        .user_repo(Arc::new(MemoryUserRepo(Arc::clone(&store))))
        .activity_repo(Arc::new(MemoryActivityRepo(Arc::clone(&store))))
        .booking_repo(Arc::new(MemoryBookingRepo(Arc::clone(&store))))
        .clock(Arc::new(FixedClock(monday_noon())))
        .id_generator(Arc::new(SnowflakeGenerator::new(0)))
        .build()
        .unwrap();

    let alice = seed::user(&ctx, "alice", UserRole::Participant, MembershipTier::Weekly1, false).await;
    let bob = seed::user(&ctx, "bob", UserRole::Participant, MembershipTier::Weekly2, true).await;
    let carol = seed::user(&ctx, "carol", UserRole::Participant, MembershipTier::Unlimited, false).await;
    let david = seed::user(&ctx, "david", UserRole::Participant, MembershipTier::Adhoc, false).await;
    let emma = seed::user(&ctx, "emma", UserRole::Volunteer, MembershipTier::Adhoc, false).await;
    let frank_volunteer =
        seed::user(&ctx, "frank", UserRole::Volunteer, MembershipTier::Weekly1, false).await;

    let yoga = seed::activity(&ctx, "Morning Yoga Session", 10, 3, true).await;
    let art = seed::activity(&ctx, "Art & Craft Workshop", 8, 2, false).await;
    let dance = seed::activity(&ctx, "Social Dance Class", 15, 4, true).await;
    let music = seed::activity(&ctx, "Music Therapy", 6, 1, true).await;

    (
        ctx,
        SeedIds {
            alice,
            bob,
            carol,
            david,
            emma,
            frank_volunteer,
            yoga,
            art,
            dance,
            music,
        },
    )
}

/// Seeding helpers shared by the service tests
pub mod seed {
    use super::*;

    /// Insert a user and return its id
    pub async fn user(
        ctx: &ServiceContext,
        name: &str,
        role: UserRole,
        tier: MembershipTier,
        wheelchair: bool,
    ) -> Snowflake {
        let id = ctx.generate_id();
        let mut user = User::new(
            id,
            name.to_string(),
            format!("{name}@example.com"),
            role,
            tier,
        );
        user.medical_flags = MedicalFlags {
            wheelchair,
            seizure_risk: false,
        };
        ctx.user_repo().create(&user).await.unwrap();
        id
    }

    /// Insert a Participant with the given tier and return its id
    pub async fn participant(ctx: &ServiceContext, name: &str, tier: MembershipTier) -> Snowflake {
        user(ctx, name, UserRole::Participant, tier, false).await
    }

    /// Insert an activity starting tomorrow and return its id
    pub async fn activity(
        ctx: &ServiceContext,
        title: &str,
        base_capacity: i64,
        volunteer_slots: i64,
        accessible: bool,
    ) -> Snowflake {
        let id = ctx.generate_id();
        let mut activity = Activity::new(
            id,
            title.to_string(),
            monday_noon() + chrono::Duration::days(1),
        );
        activity.base_capacity = base_capacity;
        activity.volunteer_slots = volunteer_slots;
        activity.requirements.accessible = accessible;
        ctx.activity_repo().create(&activity).await.unwrap();
        id
    }
}
