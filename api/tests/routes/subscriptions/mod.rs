mod subscriptions_test;
