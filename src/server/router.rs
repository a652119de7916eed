use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{auth, giveaway, guild, referral, socket, transfer, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(guild_routes())
        .merge(referral_routes())
        .merge(giveaway_routes())
        .route("/api/transfers", post(transfer::create_transfer))
        .route("/api/socket", get(socket::socket_handler))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/users/{id}/level",
            get(user::get_level).put(user::set_level),
        )
        .route(
            "/api/users/{id}/settings",
            get(user::get_settings).put(user::set_settings),
        )
        .route(
            "/api/users/{id}/profile",
            get(user::get_profile).put(user::set_profile),
        )
        .route("/api/users/{id}/balance", put(user::update_balance))
}

fn guild_routes() -> Router<AppState> {
    Router::new()
        .route("/api/guilds", get(guild::get_guilds).post(guild::create_guild))
        .route(
            "/api/guilds/{id}",
            get(guild::get_guild)
                .put(guild::update_guild)
                .delete(guild::delete_guild),
        )
        .route(
            "/api/guilds/{id}/settings",
            get(guild::get_settings).put(guild::set_settings),
        )
        .route(
            "/api/guilds/{id}/suggestions",
            get(guild::get_suggestions).post(guild::create_suggestion),
        )
        .route(
            "/api/guilds/{id}/suggestions/{suggestion_id}",
            get(guild::get_suggestion)
                .put(guild::update_suggestion)
                .delete(guild::delete_suggestion),
        )
        .route(
            "/api/guilds/{id}/support-tickets",
            get(guild::get_support_tickets).post(guild::create_support_ticket),
        )
        .route(
            "/api/guilds/{id}/support-tickets/{ticket_id}",
            get(guild::get_support_ticket)
                .put(guild::update_support_ticket)
                .delete(guild::delete_support_ticket),
        )
        .route(
            "/api/guilds/{id}/users",
            get(guild::get_members).post(guild::add_member),
        )
        .route(
            "/api/guilds/{id}/users/{user_id}",
            get(guild::get_member)
                .put(guild::update_member)
                .delete(guild::remove_member),
        )
}

fn referral_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/referrals",
            get(referral::get_referrals).post(referral::create_referral),
        )
        .route(
            "/api/referrals/{id}",
            get(referral::get_referral)
                .put(referral::update_referral)
                .delete(referral::delete_referral),
        )
}

fn giveaway_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/giveaways",
            get(giveaway::get_giveaways).post(giveaway::create_giveaway),
        )
        .route(
            "/api/giveaways/{id}",
            get(giveaway::get_giveaway)
                .put(giveaway::update_giveaway)
                .delete(giveaway::delete_giveaway),
        )
}
