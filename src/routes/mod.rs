pub mod api;
pub mod content;
pub mod packages;
pub mod todolists;

use rocket::routes;

pub fn get_routes() -> Vec<rocket::Route> {
    routes![
        // API routes with /api/v1/ prefix
        api::health_check,
        api::flag_stats,
        api::list_mirrors,
        api::list_press,
        api::list_alt_forums,
        api::list_donors,
        packages::add_signoff,
        todolists::incomplete_todolists,
        todolists::get_todolist,
        todolists::add_todolist_package,
        todolists::update_todolist_package,
        // Public addressing scheme shared with the front end
        packages::package_detail,
        content::list_news,
        content::news_detail,
        content::wiki_page,
    ]
}
