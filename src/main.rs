use rocket::launch;

#[launch]
async fn rocket() -> _ {
    // Initialize logging
    env_logger::init();

    archweb::create_rocket()
}
