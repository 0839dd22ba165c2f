mod app;
mod notification;
mod notifier;

use std::sync::Arc;

use command_use_case::{
    add_product::{self, HasAddProduct},
    remove_product::{self, HasRemoveProduct},
    update_product_amount::{self, HasUpdateProductAmount},
};
use query_use_case::get_cart::{self, HasGetCart};
use tokio::sync::Mutex;

pub use self::app::App;
pub use self::notification::Notification;
#[cfg(any(test, feature = "test-util"))]
pub use self::notifier::MockNotifier;
pub use self::notifier::Notifier;

/// Handle to the session's cart.
///
/// Clones share the same state. Mutations through one handle are serialized,
/// and their failures are reported to the notifier instead of being returned.
#[derive(Clone)]
pub struct CartStore<T> {
    app: T,
    notifier: Arc<dyn Notifier + Send + Sync>,
    write_lock: Arc<Mutex<()>>,
}

impl<T> CartStore<T>
where
    T: HasAddProduct + HasGetCart + HasRemoveProduct + HasUpdateProductAmount,
{
    pub fn new(app: T, notifier: Arc<dyn Notifier + Send + Sync>) -> Self {
        Self {
            app,
            notifier,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn add_product(&self, product_id: u64) {
        let _guard = self.write_lock.lock().await;
        if let Err(e) = self
            .app
            .add_product()
            .execute(add_product::Input { product_id })
            .await
        {
            self.notify(Notification::from(&e), &e);
        }
    }

    pub async fn cart(&self) -> Result<get_cart::Output, get_cart::Error> {
        self.app.get_cart().execute(get_cart::Input).await
    }

    pub async fn remove_product(&self, product_id: u64) {
        let _guard = self.write_lock.lock().await;
        if let Err(e) = self
            .app
            .remove_product()
            .execute(remove_product::Input { product_id })
            .await
        {
            self.notify(Notification::from(&e), &e);
        }
    }

    pub async fn update_product_amount(&self, product_id: u64, amount: i64) {
        let _guard = self.write_lock.lock().await;
        if let Err(e) = self
            .app
            .update_product_amount()
            .execute(update_product_amount::Input { amount, product_id })
            .await
        {
            self.notify(Notification::from(&e), &e);
        }
    }

    fn notify(&self, notification: Notification, error: &(dyn std::error::Error + 'static)) {
        tracing::warn!(?notification, error = %error, "cart operation failed");
        self.notifier.notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use command_use_case::{
        add_product::MockAddProduct, remove_product::MockRemoveProduct,
        update_product_amount::MockUpdateProductAmount,
    };
    use domain::value_object::{stock, ProductId};
    use query_use_case::get_cart::MockGetCart;

    use super::*;

    #[tokio::test]
    async fn test_add_product_happy_path() -> anyhow::Result<()> {
        let mut mocks = Mocks::new();
        mocks.add_product = {
            let mut mock = MockAddProduct::new();
            mock.expect_execute()
                .withf(|input| input.product_id == 1)
                .return_once(|_| Ok(add_product::Output));
            Arc::new(mock)
        };
        let store = CartStore::new(mocks, Arc::new(notifier_expecting(None)));
        store.add_product(1).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_add_product_stock_exceeded() -> anyhow::Result<()> {
        let mut mocks = Mocks::new();
        mocks.add_product = {
            let mut mock = MockAddProduct::new();
            mock.expect_execute().return_once(|_| {
                Err(add_product::Error::StockExceeded(build_stock_error()))
            });
            Arc::new(mock)
        };
        let store = CartStore::new(
            mocks,
            Arc::new(notifier_expecting(Some(Notification::OutOfStock))),
        );
        store.add_product(1).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_add_product_error() -> anyhow::Result<()> {
        let mut mocks = Mocks::new();
        mocks.add_product = {
            let mut mock = MockAddProduct::new();
            mock.expect_execute()
                .return_once(|_| Err(add_product::Error::StockFind(build_error().into())));
            Arc::new(mock)
        };
        let store = CartStore::new(
            mocks,
            Arc::new(notifier_expecting(Some(Notification::AddFailed))),
        );
        store.add_product(1).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_product_error() -> anyhow::Result<()> {
        let mut mocks = Mocks::new();
        mocks.remove_product = {
            let mut mock = MockRemoveProduct::new();
            mock.expect_execute()
                .withf(|input| input.product_id == 2)
                .return_once(|input| {
                    Err(remove_product::Error::LineItemNotFound(ProductId::from(
                        input.product_id,
                    )))
                });
            Arc::new(mock)
        };
        let store = CartStore::new(
            mocks,
            Arc::new(notifier_expecting(Some(Notification::RemoveFailed))),
        );
        store.remove_product(2).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_amount_ignored() -> anyhow::Result<()> {
        let mut mocks = Mocks::new();
        mocks.update_product_amount = {
            let mut mock = MockUpdateProductAmount::new();
            mock.expect_execute()
                .withf(|input| input.product_id == 1 && input.amount == 0)
                .return_once(|_| Ok(update_product_amount::Output::Ignored));
            Arc::new(mock)
        };
        let store = CartStore::new(mocks, Arc::new(notifier_expecting(None)));
        store.update_product_amount(1, 0).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_amount_error() -> anyhow::Result<()> {
        let mut mocks = Mocks::new();
        mocks.update_product_amount = {
            let mut mock = MockUpdateProductAmount::new();
            mock.expect_execute().return_once(|_| {
                Err(update_product_amount::Error::CartStore(
                    build_error().into(),
                ))
            });
            Arc::new(mock)
        };
        let store = CartStore::new(
            mocks,
            Arc::new(notifier_expecting(Some(Notification::UpdateFailed))),
        );
        store.update_product_amount(1, 3).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_cart() -> anyhow::Result<()> {
        let output = get_cart::Output {
            line_items: vec![get_cart::LineItem {
                amount: 2,
                image: "image1".to_string(),
                price: "10".to_string(),
                product_id: 1,
                subtotal: "20".to_string(),
                title: "title1".to_string(),
            }],
            total: "20".to_string(),
        };
        let mut mocks = Mocks::new();
        mocks.get_cart = {
            let mut mock = MockGetCart::new();
            let cloned = output.clone();
            mock.expect_execute().return_once(|_| Ok(cloned));
            Arc::new(mock)
        };
        let store = CartStore::new(mocks, Arc::new(notifier_expecting(None)));
        assert_eq!(store.cart().await?, output);
        Ok(())
    }

    #[derive(Clone)]
    struct Mocks {
        add_product: Arc<MockAddProduct>,
        get_cart: Arc<MockGetCart>,
        remove_product: Arc<MockRemoveProduct>,
        update_product_amount: Arc<MockUpdateProductAmount>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                add_product: Arc::new(MockAddProduct::new()),
                get_cart: Arc::new(MockGetCart::new()),
                remove_product: Arc::new(MockRemoveProduct::new()),
                update_product_amount: Arc::new(MockUpdateProductAmount::new()),
            }
        }
    }

    impl HasAddProduct for Mocks {
        fn add_product(&self) -> Arc<dyn add_product::AddProduct + Send + Sync> {
            self.add_product.clone()
        }
    }

    impl HasGetCart for Mocks {
        fn get_cart(&self) -> Arc<dyn get_cart::GetCart + Send + Sync> {
            self.get_cart.clone()
        }
    }

    impl HasRemoveProduct for Mocks {
        fn remove_product(&self) -> Arc<dyn remove_product::RemoveProduct + Send + Sync> {
            self.remove_product.clone()
        }
    }

    impl HasUpdateProductAmount for Mocks {
        fn update_product_amount(
            &self,
        ) -> Arc<dyn update_product_amount::UpdateProductAmount + Send + Sync> {
            self.update_product_amount.clone()
        }
    }

    fn build_error() -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(std::io::Error::other("error"))
    }

    fn build_stock_error() -> stock::Error {
        stock::Error {
            available: 0,
            product_id: ProductId::from(1),
            requested: 1,
        }
    }

    fn notifier_expecting(expected: Option<Notification>) -> MockNotifier {
        let mut notifier = MockNotifier::new();
        match expected {
            None => {
                notifier.expect_notify().never();
            }
            Some(expected) => {
                notifier
                    .expect_notify()
                    .withf(move |notification| *notification == expected)
                    .times(1)
                    .return_const(());
            }
        }
        notifier
    }
}
