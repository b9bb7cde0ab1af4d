// ============================================================================
// msgcat - Message Accessors
// ============================================================================
//
// File: src/messages.rs
// Role: One accessor function per message key
// Boundaries:
//   - ✅ Accessor generation from the key list
//   - ✅ Accessor tables for enumeration
//   - ❌ Should not contain templates
//   - ❌ Should not contain lookup logic (see core::translator)
//
// ============================================================================

//! Typed accessors over [`translate`].
//!
//! Static messages take only options; parameterized messages also take the
//! [`Params`] their template names.
//!
//! ```
//! use msgcat::{messages, Locale, MessageOptions, Params};
//!
//! let options = MessageOptions::locale(Locale::En);
//! assert_eq!(messages::nav_home(&options), "Home");
//!
//! let params = Params::new().with("username", "alice");
//! assert_eq!(messages::dashboard_welcome_back(&params, &options), "Welcome back, alice!");
//! ```

use crate::core::translator::translate;
use crate::models::message::{MessageOptions, Params};

/// Accessor of a static message
pub type StaticAccessor = fn(&MessageOptions) -> String;

/// Accessor of a parameterized message
pub type ParamAccessor = fn(&Params, &MessageOptions) -> String;

macro_rules! static_messages {
    ($($name:ident => $key:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", $key, "`")]
            pub fn $name(options: &MessageOptions) -> String {
                translate($key, &Params::new(), options)
            }
        )*

        /// Every static accessor with its key
        pub const STATIC_ACCESSORS: &[(&str, StaticAccessor)] =
            &[$(($key, $name as StaticAccessor)),*];
    };
}

macro_rules! param_messages {
    ($($name:ident => $key:literal [$($param:ident),+]),* $(,)?) => {
        $(
            #[doc = concat!("`", $key, "`, parameters:", $(" `", stringify!($param), "`"),+)]
            pub fn $name(params: &Params, options: &MessageOptions) -> String {
                translate($key, params, options)
            }
        )*

        /// Every parameterized accessor with its key and parameter names
        pub const PARAM_ACCESSORS: &[(&str, &[&str], ParamAccessor)] =
            &[$(($key, &[$(stringify!($param)),+], $name as ParamAccessor)),*];
    };
}

static_messages! {
    hello => "hello",
    welcome => "welcome",
    loading => "loading",
    price => "price",

    nav_home => "nav_home",
    nav_search => "nav_search",
    nav_sell => "nav_sell",
    nav_messages => "nav_messages",
    nav_profile => "nav_profile",
    nav_favorites => "nav_favorites",
    nav_orders => "nav_orders",
    nav_settings => "nav_settings",
    nav_logout => "nav_logout",
    nav_login => "nav_login",
    nav_signup => "nav_signup",
    nav_start_selling => "nav_startSelling",
    nav_browse_categories => "nav_browseCategories",

    search_placeholder => "search_placeholder",
    search_filter => "search_filter",
    search_sort => "search_sort",
    search_results => "search_results",
    search_no_results => "search_noResults",
    search_categories => "search_categories",
    search_all => "search_all",
    search_items_found => "search_itemsFound",
    search_for => "search_for",
    search_filters => "search_filters",
    search_quick_filters => "search_quickFilters",
    search_size => "search_size",

    product_add_to_cart => "product_addToCart",
    product_buy_now => "product_buyNow",
    product_favorite => "product_favorite",
    product_share => "product_share",
    product_size => "product_size",
    product_condition => "product_condition",
    product_brand => "product_brand",
    product_description => "product_description",
    product_seller => "product_seller",
    product_reviews => "product_reviews",
    product_similar => "product_similar",
    product_sold => "product_sold",
    product_available => "product_available",
    product_new => "product_new",
    product_like_new => "product_likeNew",
    product_good => "product_good",

    common_cancel => "common_cancel",
    common_save => "common_save",
    common_delete => "common_delete",
    common_edit => "common_edit",
    common_close => "common_close",
    common_confirm => "common_confirm",
    common_yes => "common_yes",
    common_no => "common_no",
    common_ok => "common_ok",
    common_back => "common_back",
    common_next => "common_next",
    common_previous => "common_previous",
    common_submit => "common_submit",
    common_currency => "common_currency",

    auth_sign_in => "auth_signIn",
    auth_sign_up => "auth_signUp",
    auth_sign_out => "auth_signOut",
    auth_email => "auth_email",
    auth_password => "auth_password",
    auth_confirm_password => "auth_confirmPassword",
    auth_first_name => "auth_firstName",
    auth_last_name => "auth_lastName",
    auth_username => "auth_username",
    auth_forgot_password => "auth_forgotPassword",

    checkout_summary => "checkout_summary",
    checkout_subtotal => "checkout_subtotal",
    checkout_shipping => "checkout_shipping",
    checkout_tax => "checkout_tax",
    checkout_total => "checkout_total",
    checkout_proceed_to_payment => "checkout_proceedToPayment",
    checkout_place_order => "checkout_placeOrder",
    checkout_order_placed => "checkout_orderPlaced",
    checkout_payment_method => "checkout_paymentMethod",
    checkout_shipping_address => "checkout_shippingAddress",

    dashboard_shop_status => "dashboard_shopStatus",
    dashboard_new_listing => "dashboard_newListing",
    dashboard_sold_items => "dashboard_soldItems",
    dashboard_earnings => "dashboard_earnings",
    dashboard_upgrade => "dashboard_upgrade",
    dashboard_admin_panel => "dashboard_adminPanel",
    dashboard_analytics => "dashboard_analytics",
    dashboard_settings => "dashboard_settings",
    dashboard_available_balance => "dashboard_availableBalance",
    dashboard_sales => "dashboard_sales",

    sell_includes => "sell_includes",
    sell_selected => "sell_selected",
    sell_accessories_list => "sell_accessoriesList",
    sell_category_title => "sell_categoryTitle",
    sell_category_description => "sell_categoryDescription",
    sell_be_more_specific => "sell_beMoreSpecific",
    sell_optional => "sell_optional",
    sell_type_category_placeholder => "sell_typeCategoryPlaceholder",
    sell_review_your_listing => "sell_reviewYourListing",
    sell_photos_section => "sell_photosSection",
    sell_product_alt => "sell_productAlt",

    error_generic => "error_generic",
    error_network => "error_network",
    error_not_found => "error_notFound",
    error_unauthorized => "error_unauthorized",
    error_validation => "error_validation",
    error_try_again => "error_tryAgain",
    error_not_authenticated => "error_notAuthenticated",
    error_at_least_one_photo => "error_atLeastOnePhoto",
    error_category_required => "error_categoryRequired",
    error_failed_to_create_product => "error_failedToCreateProduct",

    pagination_showing => "pagination_showing",
    pagination_of => "pagination_of",
    pagination_results => "pagination_results",
    pagination_page => "pagination_page",
    pagination_go_to_page => "pagination_goToPage",

    orders_title => "orders_title",
    orders_subtitle => "orders_subtitle",
    orders_all_orders => "orders_allOrders",
    orders_purchases => "orders_purchases",
    orders_items_to_ship => "orders_itemsToShip",
    orders_total_orders => "orders_totalOrders",
    orders_ship => "orders_ship",
    orders_shipped => "orders_shipped",
}

param_messages! {
    dashboard_welcome_back => "dashboard_welcomeBack" [username],
    dashboard_minutes_ago => "dashboard_minutesAgo" [minutes],
    dashboard_hours_ago => "dashboard_hoursAgo" [hours],
    dashboard_days_ago => "dashboard_daysAgo" [days],
    sell_photo_count => "sell_photoCount" [count],
    sell_photos_count => "sell_photosCount" [count],
    sell_photos_uploaded => "sell_photosUploaded" [count, s],
    sell_more_allowed => "sell_moreAllowed" [count],
    sell_more_photos => "sell_morePhotos" [count],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::MessageTable;
    use crate::models::locale::Locale;

    #[test]
    fn every_key_has_an_accessor() {
        let mut keys: Vec<&str> = STATIC_ACCESSORS
            .iter()
            .map(|(key, _)| *key)
            .chain(PARAM_ACCESSORS.iter().map(|(key, _, _)| *key))
            .collect();
        keys.sort_unstable();
        let table_keys: Vec<&str> = MessageTable::global().keys().collect();
        assert_eq!(keys, table_keys);
    }

    #[test]
    fn static_accessors_are_non_empty_in_every_locale() {
        for locale in Locale::all() {
            let options = MessageOptions::locale(*locale);
            for (key, accessor) in STATIC_ACCESSORS {
                let text = accessor(&options);
                assert!(!text.trim().is_empty(), "'{key}' is empty in {locale}");
                assert_ne!(text, *key, "'{key}' did not resolve in {locale}");
            }
        }
    }

    #[test]
    fn param_accessors_substitute_every_declared_param() {
        for locale in Locale::all() {
            let options = MessageOptions::locale(*locale);
            for (key, names, accessor) in PARAM_ACCESSORS {
                let params: Params = names.iter().map(|name| (*name, 42)).collect();
                let text = accessor(&params, &options);
                assert!(text.contains("42"), "'{key}' in {locale}: {text}");
                assert!(!text.contains('{'), "'{key}' in {locale} left a placeholder: {text}");
            }
        }
    }

    #[test]
    fn welcome_back_contains_username() {
        let options = MessageOptions::locale(Locale::Bg);
        let alice = dashboard_welcome_back(&Params::new().with("username", "alice"), &options);
        let bob = dashboard_welcome_back(&Params::new().with("username", "bob"), &options);
        assert_eq!(alice, "Добре дошъл, alice!");
        assert!(bob.contains("bob"));
        assert_ne!(alice, bob);
    }

    #[test]
    fn accessor_matches_generic_lookup() {
        let options = MessageOptions::locale(Locale::Ua);
        assert_eq!(nav_home(&options), translate("nav_home", &Params::new(), &options));
        assert_eq!(nav_home(&options), "Головна");
    }

    #[test]
    fn russian_falls_back_for_untranslated_keys() {
        let options = MessageOptions::locale(Locale::Ru);
        assert_eq!(orders_shipped(&options), "Shipped");
        assert_eq!(
            sell_more_photos(&Params::new().with("count", 3), &options),
            "+3 more"
        );
    }
}
