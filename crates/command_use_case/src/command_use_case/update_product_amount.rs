use std::sync::Arc;

use domain::value_object::{Amount, ProductId};

#[cfg(any(test, feature = "test-util"))]
use crate::command_use_case::port::{CartRepository, StockService};
use crate::port::{HasCartRepository, HasStockService};

#[derive(Debug)]
pub struct Input {
    pub amount: i64,
    pub product_id: u64,
}

#[derive(Debug, Eq, PartialEq)]
pub enum Output {
    /// `amount <= 0`. Nothing was looked up or stored.
    Ignored,
    Updated,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("amount")]
    Amount(#[source] domain::value_object::amount::Error),
    #[error("cart find")]
    CartFind(#[source] crate::command_use_case::port::cart_repository::Error),
    #[error("cart store")]
    CartStore(#[source] crate::command_use_case::port::cart_repository::Error),
    #[error("cart update")]
    CartUpdate(#[source] domain::aggregate::cart::Error),
    #[error("stock exceeded")]
    StockExceeded(#[source] domain::value_object::stock::Error),
    #[error("stock find")]
    StockFind(#[source] crate::command_use_case::port::stock_service::Error),
    #[error("stock not found (product id = {0})")]
    StockNotFound(ProductId),
}

#[async_trait::async_trait]
pub trait UpdateProductAmount: HasCartRepository + HasStockService {
    /// Sets the amount of a line item.
    ///
    /// A product that is not in the cart leaves the line items unchanged; unlike
    /// removal this is not reported as an error.
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, Input { amount, product_id }: Input) -> Result<Output, Error> {
        if amount <= 0 {
            return Ok(Output::Ignored);
        }
        let cart_repository = self.cart_repository();
        let stock_service = self.stock_service();
        let product_id = ProductId::from(product_id);
        let stock = stock_service
            .find_stock(product_id)
            .await
            .map_err(Error::StockFind)?
            .ok_or(Error::StockNotFound(product_id))?;
        stock
            .ensure_available(amount.unsigned_abs())
            .map_err(Error::StockExceeded)?;
        let amount = Amount::try_from(amount).map_err(Error::Amount)?;
        let cart = cart_repository.find().await.map_err(Error::CartFind)?;
        let updated = cart
            .update_amount(product_id, amount)
            .map_err(Error::CartUpdate)?;
        cart_repository
            .store(cart.version(), &updated)
            .await
            .map_err(Error::CartStore)?;
        Ok(Output::Updated)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub UpdateProductAmount {}

    impl HasCartRepository for UpdateProductAmount {
        fn cart_repository(&self) -> Arc<dyn CartRepository + Send + Sync>;
    }

    impl HasStockService for UpdateProductAmount {
        fn stock_service(&self) -> Arc<dyn StockService + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl UpdateProductAmount for UpdateProductAmount {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasUpdateProductAmount {
    fn update_product_amount(&self) -> Arc<dyn UpdateProductAmount + Send + Sync>;
}

#[cfg(test)]
mod tests {
    use domain::{
        aggregate::{Cart, LineItem},
        value_object::{Price, Product, Stock},
    };

    use crate::port::{MockCartRepository, MockStockService};

    use super::*;

    #[test]
    fn test_mock() {
        let mut mock = MockUpdateProductAmount::new();
        mock.expect_execute().return_once(|_| Ok(Output::Updated));
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_ignored() -> anyhow::Result<()> {
        for amount in [0, -1, i64::MIN] {
            let mut cart_repository = MockCartRepository::new();
            cart_repository.expect_find().never();
            cart_repository.expect_store().never();
            let mut stock_service = MockStockService::new();
            stock_service.expect_find_stock().never();
            let app = TestApp::new(cart_repository, stock_service);

            let output = app
                .execute(Input {
                    amount,
                    product_id: 1,
                })
                .await?;
            assert_eq!(output, Output::Ignored);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_update() -> anyhow::Result<()> {
        let cart = build_cart(&[(1, 1), (2, 1)])?;
        let current = cart.version();
        let untouched = cart.line_items()[0].clone();
        let mut cart_repository = MockCartRepository::new();
        cart_repository.expect_find().return_once(|| Ok(cart));
        cart_repository
            .expect_store()
            .withf(move |version, cart| {
                *version == current
                    && cart.line_items().len() == 2
                    && cart.line_items()[0] == untouched
                    && cart.line_items()[1].product_id() == ProductId::from(2)
                    && u32::from(cart.line_items()[1].amount()) == 4
            })
            .return_once(|_, _| Ok(()));
        let mut stock_service = MockStockService::new();
        stock_service
            .expect_find_stock()
            .withf(|product_id| *product_id == ProductId::from(2))
            .return_once(|product_id| Ok(Some(Stock::new(product_id, 4))));
        let app = TestApp::new(cart_repository, stock_service);

        let output = app
            .execute(Input {
                amount: 4,
                product_id: 2,
            })
            .await?;
        assert_eq!(output, Output::Updated);
        Ok(())
    }

    #[tokio::test]
    async fn test_stock_exceeded() -> anyhow::Result<()> {
        let mut cart_repository = MockCartRepository::new();
        cart_repository.expect_find().never();
        cart_repository.expect_store().never();
        let mut stock_service = MockStockService::new();
        stock_service
            .expect_find_stock()
            .return_once(|product_id| Ok(Some(Stock::new(product_id, 5))));
        let app = TestApp::new(cart_repository, stock_service);

        let result = app
            .execute(Input {
                amount: 10,
                product_id: 1,
            })
            .await;
        assert!(matches!(result, Err(Error::StockExceeded(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_absent_product_leaves_line_items_unchanged() -> anyhow::Result<()> {
        let cart = build_cart(&[(1, 2)])?;
        let expected = cart.line_items().to_vec();
        let mut cart_repository = MockCartRepository::new();
        cart_repository.expect_find().return_once(|| Ok(cart));
        cart_repository
            .expect_store()
            .withf(move |_, cart| cart.line_items() == expected)
            .return_once(|_, _| Ok(()));
        let mut stock_service = MockStockService::new();
        stock_service
            .expect_find_stock()
            .return_once(|product_id| Ok(Some(Stock::new(product_id, 5))));
        let app = TestApp::new(cart_repository, stock_service);

        let output = app
            .execute(Input {
                amount: 3,
                product_id: 9,
            })
            .await?;
        assert_eq!(output, Output::Updated);
        Ok(())
    }

    #[tokio::test]
    async fn test_stock_find_error() -> anyhow::Result<()> {
        let mut cart_repository = MockCartRepository::new();
        cart_repository.expect_store().never();
        let mut stock_service = MockStockService::new();
        stock_service
            .expect_find_stock()
            .return_once(|_| Err(build_error().into()));
        let app = TestApp::new(cart_repository, stock_service);

        let result = app
            .execute(Input {
                amount: 1,
                product_id: 1,
            })
            .await;
        assert!(matches!(result, Err(Error::StockFind(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_amount_out_of_range_exceeds_stock() -> anyhow::Result<()> {
        for amount in [i64::from(u32::MAX) + 1, 5_000_000_000, i64::MAX] {
            let mut cart_repository = MockCartRepository::new();
            cart_repository.expect_find().never();
            cart_repository.expect_store().never();
            let mut stock_service = MockStockService::new();
            stock_service
                .expect_find_stock()
                .return_once(|product_id| Ok(Some(Stock::new(product_id, u32::MAX))));
            let app = TestApp::new(cart_repository, stock_service);

            let result = app
                .execute(Input {
                    amount,
                    product_id: 1,
                })
                .await;
            assert!(
                matches!(result, Err(Error::StockExceeded(ref e)) if i64::try_from(e.requested) == Ok(amount)),
                "{amount}"
            );
        }
        Ok(())
    }

    struct TestApp {
        cart_repository: Arc<MockCartRepository>,
        stock_service: Arc<MockStockService>,
    }

    impl TestApp {
        fn new(cart_repository: MockCartRepository, stock_service: MockStockService) -> Self {
            Self {
                cart_repository: Arc::new(cart_repository),
                stock_service: Arc::new(stock_service),
            }
        }
    }

    impl HasCartRepository for TestApp {
        fn cart_repository(&self) -> Arc<dyn CartRepository + Send + Sync> {
            self.cart_repository.clone()
        }
    }

    impl HasStockService for TestApp {
        fn stock_service(&self) -> Arc<dyn StockService + Send + Sync> {
            self.stock_service.clone()
        }
    }

    impl UpdateProductAmount for TestApp {}

    fn build_cart(items: &[(u64, u32)]) -> anyhow::Result<Cart> {
        let mut cart = Cart::new();
        for (id, amount) in items {
            cart = cart.insert(LineItem::new(
                Product {
                    id: ProductId::from(*id),
                    image: format!("https://example.com/{id}.jpg"),
                    price: Price::zero(),
                    title: format!("product{id}"),
                },
                Amount::try_from(*amount)?,
            ))?;
        }
        Ok(cart)
    }

    fn build_error() -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(std::io::Error::other("error"))
    }
}
