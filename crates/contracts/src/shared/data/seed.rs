//! Compiled-in mock data, built once on first access
use once_cell::sync::Lazy;

use crate::dashboards::d100_revenue_summary::{InboxMessage, TopProduct, VisitorShare};
use crate::domain::a001_product::aggregate::{Product, ProductVariation};
use crate::domain::a002_umkm::aggregate::{Merchant, MerchantAccount, MerchantDirectory};
use crate::domain::a003_finance::aggregate::{DisbursementStatus, FinanceRecord};
use crate::domain::a004_sales::aggregate::{SalesRecord, SalesStatus};
use crate::domain::a005_shipping::aggregate::ShippingRecord;
use crate::domain::a006_order::aggregate::OrderRecord;
use crate::domain::a007_app_user::aggregate::AppUser;
use crate::system::support::FaqEntry;

const BUYER: &str = "Mamat guncop el rumi";
const RECEIPT: &str = "IDX987423849692364978";
const ADDRESS: &str = "Jl. Lorem ipsum dolor sit amet lorem ipsum...";

pub static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            id: "P001".into(),
            name: "Basreng Pedas Daun Jeruk".into(),
            image: "/images/product/basreng.png".into(),
            category: "FnB".into(),
            merchant: "Basreng bakar by Hilni".into(),
            price: 15000.0,
            stock: 40,
            sold: 12,
            permit_number: Some("PIRT 2063271010123-27".into()),
            description: Some("Basreng renyah dengan bumbu daun jeruk.".into()),
            variations: vec![
                ProductVariation {
                    name: "Pedas".into(),
                    price: 15000.0,
                    stock: 25,
                },
                ProductVariation {
                    name: "Original".into(),
                    price: 14000.0,
                    stock: 15,
                },
            ],
        },
        Product {
            id: "P002".into(),
            name: "Seblak Kering Original".into(),
            image: "/images/product/seblak.png".into(),
            category: "FnB".into(),
            merchant: "Warung Seblak Teh Euis".into(),
            price: 12000.0,
            stock: 60,
            sold: 30,
            permit_number: None,
            description: None,
            variations: Vec::new(),
        },
        Product {
            id: "P003".into(),
            name: "Kopi Susu Gula Aren".into(),
            image: "/images/product/kopi.png".into(),
            category: "FnB".into(),
            merchant: "Kopi Senja Abadi".into(),
            price: 22000.0,
            stock: 0,
            sold: 54,
            permit_number: Some("BPOM MD 123456789012".into()),
            description: Some("Kopi robusta dengan susu segar dan gula aren.".into()),
            variations: Vec::new(),
        },
    ]
});

pub static MERCHANTS: Lazy<Vec<Merchant>> = Lazy::new(|| {
    vec![
        Merchant {
            id: "C001".into(),
            name: "Basreng bakar by Hilni".into(),
            total_products: 3,
            contact: "0819282910".into(),
            balance: 120000.0,
            bank: "Mandiri".into(),
            account_number: "1020938091".into(),
        },
        Merchant {
            id: "C002".into(),
            name: "Warung Seblak Teh Euis".into(),
            total_products: 1,
            contact: "081234500011".into(),
            balance: 2500000.0,
            bank: "BCA".into(),
            account_number: "8887776665".into(),
        },
        Merchant {
            id: "C003".into(),
            name: "Kopi Senja Abadi".into(),
            total_products: 1,
            contact: "085700012345".into(),
            balance: 750000.0,
            bank: "BRI".into(),
            account_number: "1234567890".into(),
        },
    ]
});

pub static MERCHANT_DIRECTORY: Lazy<MerchantDirectory> = Lazy::new(|| {
    [
        ("Basreng bakar by Hilni", "Mandiri", "1020938091", 120000.0),
        ("Warung Seblak Teh Euis", "BCA", "8887776665", 2500000.0),
        ("Kopi Senja Abadi", "BRI", "1234567890", 750000.0),
    ]
    .into_iter()
    .map(|(name, bank, account_number, total_income)| {
        (
            name.to_string(),
            MerchantAccount {
                bank: bank.to_string(),
                account_number: account_number.to_string(),
                total_income,
            },
        )
    })
    .collect()
});

pub static FINANCE_RECORDS: Lazy<Vec<FinanceRecord>> = Lazy::new(|| {
    vec![FinanceRecord {
        id: "B010".into(),
        merchant: "Basreng bakar by Hilni".into(),
        total_products: 3,
        balance: 120000.0,
        disbursement: 120000.0,
        bank: "Mandiri".into(),
        account_number: "1020938091".into(),
        date: "20/20/2025".into(),
        status: DisbursementStatus::Approved,
        transfer_reference: None,
    }]
});

fn dashboard_sale(id: &str, user: &str, qty: u32, date: &str, receipt: &str, price: f64) -> SalesRecord {
    SalesRecord {
        id: id.into(),
        user_name: user.into(),
        status: SalesStatus::Completed,
        product_count: qty,
        order_date: date.into(),
        receipt_number: receipt.into(),
        price,
    }
}

/// Input of the dashboard revenue summary; exactly one record on 25/07/2024
pub static DASHBOARD_SALES: Lazy<Vec<SalesRecord>> = Lazy::new(|| {
    vec![
        dashboard_sale("S001", "Andi", 2, "02/07/2024", "IDX1", 150000.0),
        dashboard_sale("S002", "Budi", 1, "03/07/2024", "IDX2", 75000.0),
        dashboard_sale("S003", "Citra", 3, "03/07/2024", "IDX3", 220000.0),
        dashboard_sale("S004", "Dewi", 5, "25/07/2024", "IDX4", 300000.0),
        dashboard_sale("S005", "Eka", 2, "24/07/2024", "IDX5", 125000.0),
        dashboard_sale("S006", "Fani", 1, "24/07/2024", "IDX6", 52000.0),
        dashboard_sale("S007", "Gita", 4, "15/06/2024", "IDX7", 400000.0),
        dashboard_sale("S008", "Hadi", 2, "20/06/2024", "IDX8", 180000.0),
        dashboard_sale("S009", "Test User", 33, "20/05/2024", "IDX9", 10777.0),
    ]
});

pub static SALES: Lazy<Vec<SalesRecord>> = Lazy::new(|| {
    [
        ("E001", SalesStatus::Completed, RECEIPT),
        ("E002", SalesStatus::Shipped, RECEIPT),
        ("E003", SalesStatus::Paid, "-"),
    ]
    .into_iter()
    .map(|(id, status, receipt)| SalesRecord {
        id: id.into(),
        user_name: BUYER.into(),
        status,
        product_count: 2,
        order_date: "20/12/2025".into(),
        receipt_number: receipt.into(),
        price: 100000.0,
    })
    .collect()
});

pub static SHIPMENTS: Lazy<Vec<ShippingRecord>> = Lazy::new(|| {
    vec![ShippingRecord {
        id: "E001".into(),
        user_name: BUYER.into(),
        product_count: 2,
        shipping_date: "20/12/2025".into(),
        receipt_number: RECEIPT.into(),
    }]
});

pub static ORDERS: Lazy<Vec<OrderRecord>> = Lazy::new(|| {
    vec![OrderRecord {
        id: "E001".into(),
        user_name: BUYER.into(),
        product_count: 2,
        total_price: 100000.0,
        date: "20/12/2025".into(),
        email: "mamat@gun.shop.com".into(),
        address: ADDRESS.into(),
    }]
});

pub static APP_USERS: Lazy<Vec<AppUser>> = Lazy::new(|| {
    vec![
        AppUser {
            id: "U001".into(),
            name: "Mamat Guncop El Rumi".into(),
            avatar: "https://i.ibb.co/6Hk2c5v/man-avatar-scaled.jpg".into(),
            email: "mamat@gun.shop.com".into(),
            total_orders: 5,
            join_date: "20/12/2025".into(),
        },
        AppUser {
            id: "U002".into(),
            name: "Jane Doe".into(),
            avatar: "https://i.pravatar.cc/40?u=jane".into(),
            email: "jane.doe@example.com".into(),
            total_orders: 2,
            join_date: "15/11/2025".into(),
        },
        AppUser {
            id: "U003".into(),
            name: "John Smith".into(),
            avatar: "https://i.pravatar.cc/40?u=john".into(),
            email: "john.smith@example.com".into(),
            total_orders: 8,
            join_date: "01/10/2025".into(),
        },
    ]
});

pub static TOP_PRODUCTS: Lazy<Vec<TopProduct>> = Lazy::new(|| {
    (1..=3)
        .map(|n| TopProduct {
            name: "Apple Watch Series 7".into(),
            image: format!("https://picsum.photos/seed/watch{n}/40/40"),
            category: "Electronics".into(),
            price: 269.0,
            clicks: 22,
        })
        .collect()
});

pub static INBOX_MESSAGES: Lazy<Vec<InboxMessage>> = Lazy::new(|| {
    [
        ("1", "Musharod Chowdury", "Some note & lorem in some form.", "17 Oct, 2024", false),
        ("2", "Naimur Rahman", "Lorem ipsum alteration in some form.", "25 Nov, 2024", false),
        ("3", "Shafiq Hammad", "Lorem available alteration in some form.", "25 Nov, 2024", true),
        ("4", "Alex Semuyel", "Lorem ipsum available in some form.", "25 Nov, 2024", true),
        ("5", "Jhon Smith", "available alteration in some form.", "25 Nov, 2024", true),
    ]
    .into_iter()
    .map(|(id, sender, subject, date, read)| InboxMessage {
        id: id.into(),
        sender: sender.into(),
        subject: subject.into(),
        date: date.into(),
        read,
    })
    .collect()
});

pub static VISITOR_SHARES: Lazy<Vec<VisitorShare>> = Lazy::new(|| {
    [
        ("Desktop", 65.0, "#0d9488"),
        ("Mobile", 45.0, "#f97316"),
        ("Tablet", 34.0, "#2dd4bf"),
        ("Unknow", 12.0, "#f59e0b"),
    ]
    .into_iter()
    .map(|(label, value, color)| VisitorShare {
        label: label.into(),
        value,
        color: color.into(),
    })
    .collect()
});

/// Visitor count shown in the middle of the donut
pub const TOTAL_VISITORS: u32 = 2548;

pub static FAQS: Lazy<Vec<FaqEntry>> = Lazy::new(|| {
    [
        (
            "Bagaimana cara menambahkan produk baru?",
            "Untuk menambahkan produk baru, pergi ke halaman 'Kelola Produk', lalu klik tombol 'Tambah Produk Baru'. Isi semua detail yang diperlukan di formulir modal yang muncul dan klik 'Tambahkan Produk Baru' untuk menyimpan.",
        ),
        (
            "Bagaimana cara mengelola keuangan UMKM?",
            "Halaman 'Kelola Keuangan' memungkinkan Anda untuk melihat dan mengelola permintaan pencairan dana dari UMKM. Anda dapat menyetujui permintaan dan melacak riwayat transaksi.",
        ),
        (
            "Apa fungsi dari halaman 'Kelola Pengguna'?",
            "Di 'Kelola Pengguna', Anda dapat mengelola semua data yang terkait dengan pengguna akhir, termasuk pesanan, status pengiriman, dan riwayat penjualan. Anda juga dapat melihat daftar pengguna yang terdaftar.",
        ),
        (
            "Bisakah saya mengedit informasi produk yang sudah ada?",
            "Ya, di halaman 'Kelola Produk', setiap produk dalam daftar memiliki ikon 'Edit'. Klik ikon ini untuk membuka modal di mana Anda dapat memperbarui detail produk.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question: question.into(),
        answer: answer.into(),
    })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_dashboard_sale_on_reference_day() {
        let on_day: Vec<_> = DASHBOARD_SALES
            .iter()
            .filter(|s| s.order_date == "25/07/2024")
            .collect();
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].price, 300000.0);
        assert_eq!(on_day[0].product_count, 5);
    }

    #[test]
    fn test_directory_matches_merchants() {
        for merchant in MERCHANTS.iter() {
            let account = MERCHANT_DIRECTORY.get(&merchant.name).unwrap();
            assert_eq!(account.account_number, merchant.account_number);
        }
    }
}
