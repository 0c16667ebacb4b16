use super::*;

const ALL_ROUTES: [AppRoute; 9] = [
    AppRoute::Home,
    AppRoute::Browse,
    AppRoute::Donors,
    AppRoute::HowItWorks,
    AppRoute::DashboardSeeker,
    AppRoute::DashboardDonor,
    AppRoute::PostRequest,
    AppRoute::PostOffer,
    AppRoute::Admin,
];

#[test]
fn hash_roundtrip_for_every_route() {
    for route in ALL_ROUTES {
        assert_eq!(AppRoute::from_hash(route.to_hash()), route);
    }
}

#[test]
fn parse_accepts_stripped_fragment() {
    assert_eq!(AppRoute::from_hash("/browse"), AppRoute::Browse);
    assert_eq!(AppRoute::from_hash("#/donors"), AppRoute::Donors);
}

#[test]
fn empty_and_root_map_to_home() {
    assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
    assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
    assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
}

#[test]
fn unknown_hash_falls_back_to_home() {
    assert_eq!(AppRoute::from_hash("#/no-such-page"), AppRoute::Home);
    assert_eq!(AppRoute::from_hash("#faq"), AppRoute::Home);
    assert_eq!(AppRoute::from_hash("#/browse/extra"), AppRoute::Home);
}

#[test]
fn guards_cover_exactly_the_authenticated_views() {
    let protected: Vec<AppRoute> = ALL_ROUTES
        .into_iter()
        .filter(AppRoute::requires_auth)
        .collect();
    assert_eq!(
        protected,
        vec![
            AppRoute::DashboardSeeker,
            AppRoute::DashboardDonor,
            AppRoute::PostRequest,
            AppRoute::PostOffer,
            AppRoute::Admin,
        ]
    );
}

#[test]
fn dashboard_matches_role() {
    use mealbridge_shared::UserRole;
    assert_eq!(
        AppRoute::dashboard_for(UserRole::Student),
        AppRoute::DashboardSeeker
    );
    assert_eq!(
        AppRoute::dashboard_for(UserRole::Donor),
        AppRoute::DashboardDonor
    );
    assert_eq!(AppRoute::dashboard_for(UserRole::Admin), AppRoute::Admin);
}

#[test]
fn faq_anchor_is_owned_by_home() {
    match NavTarget::FAQ {
        NavTarget::Anchor { id, parent } => {
            assert_eq!(id, "faq");
            assert_eq!(parent, AppRoute::Home);
        }
        NavTarget::Route(_) => panic!("FAQ must be an anchor"),
    }
}
