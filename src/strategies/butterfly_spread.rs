/*
Butterfly Spread Strategy

A butterfly spread involves buying one call at a lower strike price, selling two calls at a middle strike price, and buying one call at a higher strike price, all with the same expiration date.
This strategy is used when little to no movement in the underlying asset's price is expected.

Key characteristics:
- Limited profit potential
- Limited risk
- Profit is highest when the underlying asset price is at the middle strike price at expiration
*/
