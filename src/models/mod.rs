mod account;

pub use account::{
    generate_account_number, Account, AccountList, AccountStatus, CreateAccount, UpdateAccount,
};
