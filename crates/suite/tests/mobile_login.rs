//! Login flows on the demo app.

mod support;

use autotest_harness::{Result, Validations};

use autotest_suite::constants::{INVALID_PASSWORD, INVALID_USERNAME};
use autotest_suite::pages::mobile::{HomePage, LoginPage, ProductsPage};
use support::Suite;

#[tokio::test]
#[ignore = "needs a running Appium server and the demo app"]
async fn valid_credentials_reach_the_catalog() -> Result<()> {
    let suite = Suite::load()?;
    let session = suite.harness.setup().await?;

    let flow = async {
        let home = HomePage::new(&session);
        let login = LoginPage::new(&session);
        let products = ProductsPage::new(&session);
        let validations = Validations::new(&session);

        home.go_to_login().await?;
        login.validate_screen_displayed().await?;
        login.login_with_valid_credentials().await?;

        products.validate_screen_displayed().await?;
        validations.validate_false(
            login.is_login_button_displayed().await,
            "login button after successful login",
        )
    };
    let result = flow.await;
    suite.finish("valid_credentials_reach_the_catalog", result).await
}

#[tokio::test]
#[ignore = "needs a running Appium server and the demo app"]
async fn locked_out_user_sees_an_error() -> Result<()> {
    let suite = Suite::load()?;
    let session = suite.harness.setup().await?;

    let flow = async {
        let home = HomePage::new(&session);
        let login = LoginPage::new(&session);
        let validations = Validations::new(&session);

        home.go_to_login().await?;
        login.login_as_locked_user().await?;

        validations.validate_true(
            login.is_generic_error_displayed().await,
            "locked-out error message",
        )?;
        login.validate_screen_displayed().await
    };
    let result = flow.await;
    suite.finish("locked_out_user_sees_an_error", result).await
}

#[tokio::test]
#[ignore = "needs a running Appium server and the demo app"]
async fn invalid_credentials_stay_on_the_login_screen() -> Result<()> {
    let suite = Suite::load()?;
    let session = suite.harness.setup().await?;

    let flow = async {
        let home = HomePage::new(&session);
        let login = LoginPage::new(&session);
        let validations = Validations::new(&session);

        home.go_to_login().await?;
        login.login(INVALID_USERNAME, INVALID_PASSWORD).await?;

        validations.validate_true(
            login.is_generic_error_displayed().await || login.is_username_error_displayed().await,
            "an error message for invalid credentials",
        )?;
        login.validate_screen_displayed().await
    };
    let result = flow.await;
    suite
        .finish("invalid_credentials_stay_on_the_login_screen", result)
        .await
}

#[tokio::test]
#[ignore = "needs a running Appium server and the demo app"]
async fn empty_password_reports_a_field_error() -> Result<()> {
    let suite = Suite::load()?;
    let session = suite.harness.setup().await?;

    let flow = async {
        let home = HomePage::new(&session);
        let login = LoginPage::new(&session);
        let validations = Validations::new(&session);

        home.go_to_login().await?;
        login.login(INVALID_USERNAME, "").await?;

        validations.validate_true(
            login.is_password_error_displayed().await,
            "password field error message",
        )
    };
    let result = flow.await;
    suite.finish("empty_password_reports_a_field_error", result).await
}
