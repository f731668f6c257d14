//! Client-visible routes: each path maps to a view and its controller.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Send,
    Settings,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Send, Route::Settings];

    /// Any unmatched path redirects to the send form.
    pub fn parse(path: &str) -> Route {
        match path.trim().trim_start_matches('/') {
            "send" => Route::Send,
            "settings" => Route::Settings,
            _ => Route::Send,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Send => "/send",
            Route::Settings => "/settings",
        }
    }

    /// Message-catalog key for the nav label.
    pub fn label_key(self) -> &'static str {
        match self {
            Route::Send => "sms.route.send",
            Route::Settings => "sms.route.settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_parse_to_their_views() {
        assert_eq!(Route::parse("/send"), Route::Send);
        assert_eq!(Route::parse("/settings"), Route::Settings);
        assert_eq!(Route::parse("settings"), Route::Settings);
    }

    #[test]
    fn unknown_paths_redirect_to_send() {
        for path in ["", "/", "/log", "/Send", "/settings/extra", "garbage"] {
            assert_eq!(Route::parse(path), Route::Send, "{path:?}");
        }
    }

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), route);
        }
    }
}
