// ============================================================================
// msgcat - English Message Table
// ============================================================================
//
// File: src/i18n/en.rs
// Role: English message templates
// Boundaries:
//   - ✅ English templates keyed by message key
//   - ✅ `{name}` placeholders for parameterized messages
//   - ❌ Should not contain lookup or formatting logic
//   - ❌ Should not contain other languages
//
// ============================================================================

/// English message table
pub const MESSAGES: &[(&str, &str)] = &[
    // General
    ("hello", "Hello"),
    ("welcome", "Welcome to Driplo"),
    ("loading", "Loading..."),
    ("price", "Price"),
    // Navigation
    ("nav_home", "Home"),
    ("nav_search", "Search"),
    ("nav_sell", "Sell"),
    ("nav_messages", "Messages"),
    ("nav_profile", "Profile"),
    ("nav_favorites", "Favorites"),
    ("nav_orders", "Orders"),
    ("nav_settings", "Settings"),
    ("nav_logout", "Logout"),
    ("nav_login", "Login"),
    ("nav_signup", "Sign up"),
    ("nav_startSelling", "Start Selling"),
    ("nav_browseCategories", "Browse Categories"),
    // Search
    ("search_placeholder", "Search for items, brands..."),
    ("search_filter", "Filter"),
    ("search_sort", "Sort"),
    ("search_results", "Results"),
    ("search_noResults", "No results found"),
    ("search_categories", "Categories"),
    ("search_all", "All"),
    ("search_itemsFound", "items found"),
    ("search_for", "for"),
    ("search_filters", "Filters"),
    ("search_quickFilters", "Quick Filters"),
    ("search_size", "Size"),
    // Product page
    ("product_addToCart", "Add to cart"),
    ("product_buyNow", "Buy now"),
    ("product_favorite", "Favorite"),
    ("product_share", "Share"),
    ("product_size", "Size"),
    ("product_condition", "Condition"),
    ("product_brand", "Brand"),
    ("product_description", "Description"),
    ("product_seller", "Seller"),
    ("product_reviews", "Reviews"),
    ("product_similar", "Similar items"),
    ("product_sold", "Sold"),
    ("product_available", "Available"),
    ("product_new", "New"),
    ("product_likeNew", "Like New"),
    ("product_good", "Good"),
    // Common actions
    ("common_cancel", "Cancel"),
    ("common_save", "Save"),
    ("common_delete", "Delete"),
    ("common_edit", "Edit"),
    ("common_close", "Close"),
    ("common_confirm", "Confirm"),
    ("common_yes", "Yes"),
    ("common_no", "No"),
    ("common_ok", "OK"),
    ("common_back", "Back"),
    ("common_next", "Next"),
    ("common_previous", "Previous"),
    ("common_submit", "Submit"),
    ("common_currency", "$"),
    // Authentication
    ("auth_signIn", "Sign In"),
    ("auth_signUp", "Sign Up"),
    ("auth_signOut", "Sign Out"),
    ("auth_email", "Email"),
    ("auth_password", "Password"),
    ("auth_confirmPassword", "Confirm Password"),
    ("auth_firstName", "First Name"),
    ("auth_lastName", "Last Name"),
    ("auth_username", "Username"),
    ("auth_forgotPassword", "Forgot password?"),
    // Checkout
    ("checkout_summary", "Order summary"),
    ("checkout_subtotal", "Subtotal"),
    ("checkout_shipping", "Shipping"),
    ("checkout_tax", "Tax"),
    ("checkout_total", "Total"),
    ("checkout_proceedToPayment", "Proceed to payment"),
    ("checkout_placeOrder", "Place order"),
    ("checkout_orderPlaced", "Order placed successfully!"),
    ("checkout_paymentMethod", "Payment method"),
    ("checkout_shippingAddress", "Shipping address"),
    // Dashboard
    ("dashboard_welcomeBack", "Welcome back, {username}!"),
    ("dashboard_shopStatus", "Here's what's happening with your shop today."),
    ("dashboard_newListing", "New Listing"),
    ("dashboard_soldItems", "Sold Items"),
    ("dashboard_earnings", "Earnings"),
    ("dashboard_upgrade", "Upgrade"),
    ("dashboard_adminPanel", "Admin Panel"),
    ("dashboard_analytics", "Analytics"),
    ("dashboard_settings", "Settings"),
    ("dashboard_availableBalance", "Available Balance"),
    ("dashboard_sales", "Sales"),
    ("dashboard_minutesAgo", "{minutes}m ago"),
    ("dashboard_hoursAgo", "{hours}h ago"),
    ("dashboard_daysAgo", "{days}d ago"),
    // Sell flow
    ("sell_includes", "includes"),
    ("sell_selected", "selected"),
    ("sell_accessoriesList", "accessories list"),
    ("sell_categoryTitle", "Choose Category"),
    ("sell_categoryDescription", "Select the category that best describes your item"),
    ("sell_beMoreSpecific", "Be more specific"),
    ("sell_optional", "(optional)"),
    ("sell_typeCategoryPlaceholder", "Type category..."),
    ("sell_photoCount", "{count} photo"),
    ("sell_photosCount", "{count} photos"),
    ("sell_photosUploaded", "{count} photo{s} uploaded"),
    ("sell_moreAllowed", "{count} more allowed"),
    ("sell_morePhotos", "+{count} more"),
    ("sell_reviewYourListing", "Review Your Listing"),
    ("sell_photosSection", "Photos"),
    ("sell_productAlt", "Product"),
    // Errors
    ("error_generic", "Something went wrong"),
    ("error_network", "Network error. Please try again."),
    ("error_notFound", "Page not found"),
    ("error_unauthorized", "Unauthorized access"),
    ("error_validation", "Please check your input"),
    ("error_tryAgain", "Try again"),
    ("error_notAuthenticated", "Not authenticated"),
    ("error_atLeastOnePhoto", "At least one photo is required"),
    ("error_categoryRequired", "Category is required. Please select a category for your item."),
    ("error_failedToCreateProduct", "Failed to create product"),
    // Pagination
    ("pagination_showing", "Showing"),
    ("pagination_of", "of"),
    ("pagination_results", "results"),
    ("pagination_page", "Page"),
    ("pagination_goToPage", "Go to page"),
    // Orders
    ("orders_title", "My Orders"),
    ("orders_subtitle", "Track your purchases and sales in one place"),
    ("orders_allOrders", "All Orders"),
    ("orders_purchases", "Purchases"),
    ("orders_itemsToShip", "Items to Ship"),
    ("orders_totalOrders", "Total Orders"),
    ("orders_ship", "Ship"),
    ("orders_shipped", "Shipped"),
];
