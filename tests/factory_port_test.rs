use payment_authorizer::domain::account::Account;
use payment_authorizer::domain::ports::{AccountRepositoryBox, AccountRepositoryFactory};
use payment_authorizer::infrastructure::in_memory::InMemoryAccountRepository;

#[tokio::test]
async fn test_factory_instantiation() {
    let factory: AccountRepositoryFactory =
        Box::new(|| Box::new(InMemoryAccountRepository::new()) as AccountRepositoryBox);

    let repository = factory();
    repository.persist(Account::new("One")).await.unwrap();
    let retrieved = repository.fetch("One").await.unwrap().unwrap();
    assert_eq!(retrieved.number, "One");
}

#[tokio::test]
async fn test_factory_in_task() {
    let factory: AccountRepositoryFactory =
        Box::new(|| Box::new(InMemoryAccountRepository::new()) as AccountRepositoryBox);

    let handle = tokio::spawn(async move {
        let repository = factory();
        repository.persist(Account::new("Two")).await.unwrap();
        repository.fetch("Two").await.unwrap().unwrap()
    });

    let retrieved = handle.await.unwrap();
    assert_eq!(retrieved.number, "Two");
}
