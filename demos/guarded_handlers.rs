//! Guarded Handlers Example
//!
//! Builds needs from a request session, composes them into per-route rules,
//! and maps failures onto HTTP status codes.
//!
//! Run with: cargo run --example guarded_handlers

use needs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Denied {
    Unauthorized,
    Forbidden,
}

impl Denied {
    fn status(self) -> u16 {
        match self {
            Denied::Unauthorized => 401,
            Denied::Forbidden => 403,
        }
    }
}

struct Document {
    owner: &'static str,
}

struct Session {
    user: Option<&'static str>,
    admin: bool,
}

fn login_need(session: &Session) -> impl Need<Error = Denied> + '_ {
    from_fn(move || session.user.is_some(), Denied::Unauthorized)
}

fn admin_need(session: &Session) -> impl Need<Error = Denied> + '_ {
    from_fn(move || session.admin, Denied::Forbidden)
}

fn owner_need<'a>(session: &'a Session, doc: &'a Document) -> impl Need<Error = Denied> + 'a {
    from_fn(move || session.user == Some(doc.owner), Denied::Forbidden)
}

fn main() {
    println!("=== Guarded Handlers Example ===\n");

    let doc = Document { owner: "alice" };
    let sessions = [
        ("anonymous", Session { user: None, admin: false }),
        ("alice", Session { user: Some("alice"), admin: false }),
        ("bob", Session { user: Some("bob"), admin: false }),
        ("root", Session { user: Some("root"), admin: true }),
    ];

    for (name, session) in &sessions {
        println!("--- {} ---", name);

        // Logged in, and either the owner or an admin
        let edit = login_need(session)
            .and_with(owner_need(session, &doc).or_with(admin_need(session)))
            .guard(|| "document saved");
        report("edit", edit.call());

        // Only visitors who are not logged in see the signup page
        let signup = login_need(session).negate().guard(|| "signup form");
        report("signup", signup.call());

        // Exactly one of owner or admin, so admins cannot approve their own
        // documents
        let approve = owner_need(session, &doc).xor_with(admin_need(session));
        report("approve", approve.run(|| "approved"));

        println!();
    }
}

fn report(route: &str, result: Result<&str, Denied>) {
    match result {
        Ok(body) => println!("  {:<8} 200 {}", route, body),
        Err(denied) => println!("  {:<8} {} {:?}", route, denied.status(), denied),
    }
}
