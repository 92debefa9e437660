use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        api_docs, auth, business, business_waiter, call_history, firebase, ip_block,
        notification, plan, public_qr, role, table, table_activation, table_silence,
        waiter_call,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "MozoQR API", description = "Restaurant waiter call service"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        role::select_role,
        business::get_businesses,
        business::create_business,
        business::get_business,
        business::update_business,
        business::delete_business,
        business::join_business,
        business::switch_business,
        business_waiter::get_waiter_businesses,
        business_waiter::get_business_tables,
        business_waiter::leave_business,
        table::get_tables,
        table::create_table,
        table::update_table,
        table::delete_table,
        table::toggle_notifications,
        table_activation::activate_table,
        table_activation::deactivate_table,
        table_activation::activate_tables,
        table_activation::deactivate_tables,
        table_activation::get_assigned_tables,
        table_activation::get_available_tables,
        table_silence::silence_table,
        table_silence::unsilence_table,
        table_silence::admin_unsilence_table,
        table_silence::get_silenced_tables,
        table_silence::admin_get_silenced_tables,
        table_silence::silence_tables,
        table_silence::unsilence_tables,
        waiter_call::call_waiter,
        waiter_call::acknowledge_call,
        waiter_call::complete_call,
        waiter_call::get_pending_calls,
        call_history::get_waiter_call_history,
        call_history::get_admin_call_history,
        ip_block::block_ip,
        ip_block::unblock_ip,
        ip_block::get_blocked_ips,
        ip_block::debug_ip,
        ip_block::force_unblock_ip,
        notification::send_test_notification,
        notification::send_notification_to_user,
        notification::register_device_token,
        notification::delete_device_token,
        notification::get_notifications,
        notification::mark_notification_read,
        firebase::get_firebase_config,
        firebase::get_table_firebase_config,
        plan::get_plans,
        plan::get_plan,
        plan::get_pricing,
        public_qr::get_table_info,
        public_qr::get_table_status,
        api_docs::get_api_docs,
        api_docs::get_qr_api_docs,
        api_docs::get_waiter_api_docs,
    ),
    modifiers(&BearerAuth)
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by authenticated endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/user", get(auth::get_user))
        .route("/api/role/select", post(role::select_role))
        // Businesses
        .route(
            "/api/businesses",
            get(business::get_businesses).post(business::create_business),
        )
        .route("/api/businesses/join", post(business::join_business))
        .route("/api/businesses/switch", post(business::switch_business))
        .route(
            "/api/businesses/{id}",
            get(business::get_business)
                .put(business::update_business)
                .delete(business::delete_business),
        )
        // Tables
        .route("/api/tables", get(table::get_tables).post(table::create_table))
        .route(
            "/api/tables/{id}",
            put(table::update_table).delete(table::delete_table),
        )
        .route(
            "/api/tables/{id}/toggle-notifications",
            post(table::toggle_notifications),
        )
        // Public QR
        .route("/api/tables/{id}/call-waiter", post(waiter_call::call_waiter))
        .route(
            "/api/qr/{business_code}/{table_code}",
            get(public_qr::get_table_info),
        )
        .route("/api/table/{id}/status", get(public_qr::get_table_status))
        // Waiter
        .route(
            "/api/waiter/businesses",
            get(business_waiter::get_waiter_businesses),
        )
        .route(
            "/api/waiter/businesses/{id}/tables",
            get(business_waiter::get_business_tables),
        )
        .route(
            "/api/waiter/businesses/{id}/leave",
            post(business_waiter::leave_business),
        )
        .route(
            "/api/waiter/tables/assigned",
            get(table_activation::get_assigned_tables),
        )
        .route(
            "/api/waiter/tables/available",
            get(table_activation::get_available_tables),
        )
        .route(
            "/api/waiter/tables/silenced",
            get(table_silence::get_silenced_tables),
        )
        .route(
            "/api/waiter/tables/activate/multiple",
            post(table_activation::activate_tables),
        )
        .route(
            "/api/waiter/tables/deactivate/multiple",
            post(table_activation::deactivate_tables),
        )
        .route(
            "/api/waiter/tables/silence/multiple",
            post(table_silence::silence_tables),
        )
        .route(
            "/api/waiter/tables/unsilence/multiple",
            post(table_silence::unsilence_tables),
        )
        .route(
            "/api/waiter/tables/{id}/activate",
            post(table_activation::activate_table).delete(table_activation::deactivate_table),
        )
        .route(
            "/api/waiter/tables/{id}/silence",
            post(table_silence::silence_table).delete(table_silence::unsilence_table),
        )
        .route(
            "/api/waiter/calls/pending",
            get(waiter_call::get_pending_calls),
        )
        .route(
            "/api/waiter/calls/history",
            get(call_history::get_waiter_call_history),
        )
        .route(
            "/api/waiter/calls/{id}/acknowledge",
            post(waiter_call::acknowledge_call),
        )
        .route(
            "/api/waiter/calls/{id}/complete",
            post(waiter_call::complete_call),
        )
        .route("/api/waiter/ip/block", post(ip_block::block_ip))
        .route("/api/waiter/ip/unblock", post(ip_block::unblock_ip))
        .route("/api/waiter/ip/blocked", get(ip_block::get_blocked_ips))
        // Admin
        .route(
            "/api/admin/tables/silenced",
            get(table_silence::admin_get_silenced_tables),
        )
        .route(
            "/api/admin/tables/{id}/silence",
            delete(table_silence::admin_unsilence_table),
        )
        .route(
            "/api/admin/calls/history",
            get(call_history::get_admin_call_history),
        )
        .route("/api/admin/ip/debug", get(ip_block::debug_ip))
        .route(
            "/api/admin/ip/force-unblock",
            post(ip_block::force_unblock_ip),
        )
        .route(
            "/api/admin/send-test-notification",
            post(notification::send_test_notification),
        )
        .route(
            "/api/admin/send-notification-to-user",
            post(notification::send_notification_to_user),
        )
        // Notifications
        .route(
            "/api/device-token",
            post(notification::register_device_token).delete(notification::delete_device_token),
        )
        .route(
            "/api/user/notifications",
            get(notification::get_notifications),
        )
        .route(
            "/api/user/notifications/{id}/read",
            post(notification::mark_notification_read),
        )
        // Firebase
        .route("/api/firebase/config", get(firebase::get_firebase_config))
        .route(
            "/api/firebase/table/{id}/config",
            get(firebase::get_table_firebase_config),
        )
        // Plans
        .route("/api/plans", get(plan::get_plans))
        .route("/api/plans/pricing", get(plan::get_pricing))
        .route("/api/plans/{id}", get(plan::get_plan))
        // Documentation
        .route("/api/api-docs", get(api_docs::get_api_docs))
        .route("/api/api-docs/qr", get(api_docs::get_qr_api_docs))
        .route("/api/api-docs/waiter", get(api_docs::get_waiter_api_docs))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
