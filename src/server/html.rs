use crate::core::{Roster, UserRecord};

const PAGE_STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; margin: 0; padding: 20px; }\n\
h1 { color: #333; }\n\
.user { border: 1px solid #ddd; padding: 15px; margin-bottom: 10px; border-radius: 5px; }\n\
.user h2 { margin-top: 0; color: #444; }\n\
.user p { margin: 5px 0; }\n\
.address, .company { margin-left: 20px; color: #666; }";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_user(html: &mut String, user: &UserRecord) {
    html.push_str("<div class=\"user\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape(&user.name)));
    html.push_str(&format!("<p><strong>Username:</strong> {}</p>\n", escape(&user.username)));
    html.push_str(&format!("<p><strong>Email:</strong> {}</p>\n", escape(&user.email)));
    html.push_str(&format!("<p><strong>Phone:</strong> {}</p>\n", escape(&user.phone)));
    html.push_str(&format!(
        "<p><strong>Website:</strong> <a href=\"{0}\" target=\"_blank\">{0}</a></p>\n",
        escape(&user.website)
    ));

    let address = &user.address;
    html.push_str("<div class=\"address\">\n<h3>Address</h3>\n");
    html.push_str(&format!("<p>{}, {}</p>\n", escape(&address.street), escape(&address.suite)));
    html.push_str(&format!("<p>{}, {}</p>\n", escape(&address.city), escape(&address.zipcode)));
    html.push_str(&format!(
        "<p><strong>Coordinates:</strong> {}, {}</p>\n</div>\n",
        escape(&address.geo.lat), escape(&address.geo.lng)
    ));

    let company = &user.company;
    html.push_str("<div class=\"company\">\n<h3>Company</h3>\n");
    html.push_str(&format!("<p><strong>Name:</strong> {}</p>\n", escape(&company.name)));
    html.push_str(&format!("<p><strong>Motto:</strong> {}</p>\n", escape(&company.catch_phrase)));
    html.push_str(&format!("<p><strong>Line of business:</strong> {}</p>\n</div>\n", escape(&company.bs)));

    html.push_str("</div>\n");
}

/// Render the whole collection as one listing page.
pub fn render_listing(roster: &Roster) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>User directory</title>\n");
    html.push_str(&format!("<style>\n{}\n</style>\n", PAGE_STYLE));
    html.push_str("</head>\n<body>\n<h1>User directory</h1>\n");

    for user in roster.users() {
        render_user(&mut html, user);
    }

    html.push_str("</body></html>");
    return html;
}
