use actix_web::web::{self};

pub mod routes {
    pub mod checkout;
    pub mod views;
}

mod services {
    pub(crate) mod checkout;
}

pub mod dtos {
    pub mod checkout;
}

pub fn mount_functions() -> actix_web::Scope {
    web::scope("/functions")
        .service(routes::checkout::checkout_session_preflight)
        .service(routes::checkout::post_checkout_session)
        .service(routes::checkout::post_stripe_checkout)
}

pub fn mount_views() -> actix_web::Scope {
    web::scope("/views")
        .service(routes::views::get_order)
        .service(routes::views::get_subscription)
}
