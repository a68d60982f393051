use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{calendar_event::CalendarEventRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Access requirement checked by [`AuthGuard::require`].
pub enum Permission {
    /// User has the admin role.
    Admin,
    /// User is a teacher or an admin.
    Teacher,
    /// User belongs to the group with this ID. Admins are not exempt.
    GroupMember(i32),
    /// User created the event with this ID. Admins are not exempt.
    EventCreator(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged-in user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user, who holds every permission
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session points at a deleted user
    /// - `Err(AuthError::AccessDenied)` - The first permission the user lacks
    /// - `Err(AppError::NotFound)` - `EventCreator` names an event that does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin-only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Teacher => {
                    if !user.is_teacher_or_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to manage calendar events without the teacher role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::GroupMember(group_id) => {
                    if !user_repo.is_member(user_id, *group_id).await? {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User is not a member of group {}", group_id),
                        )
                        .into());
                    }
                }
                Permission::EventCreator(event_id) => {
                    let Some(event) = CalendarEventRepository::new(self.db)
                        .get_by_id(*event_id)
                        .await?
                    else {
                        return Err(AppError::NotFound("Event not found".to_string()));
                    };

                    if event.created_by != Some(user_id) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User did not create event {}", event_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
