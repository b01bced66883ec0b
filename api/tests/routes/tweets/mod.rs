mod tweets_test;
